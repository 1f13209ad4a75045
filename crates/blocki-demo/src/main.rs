//! Blocki: the animated block-letter logo.

mod document;
mod driver;
mod renderer;

use anyhow::Result;

use blocki_engine::device::GpuInit;
use blocki_engine::logging::{init_logging, LoggingConfig};
use blocki_engine::window::{Runtime, RuntimeConfig};

use crate::driver::FrameDriver;

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(err) = run() {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = RuntimeConfig {
        title: document::CANVAS_ID.to_string(),
        ..RuntimeConfig::default()
    };
    log::info!("starting `{}`", config.title);

    Runtime::run(config, gpu_init(), FrameDriver::new(document::shader_document()))
}

/// The mesh colors are display values, so the surface must not re-encode
/// shader output as sRGB.
fn gpu_init() -> GpuInit {
    GpuInit {
        prefer_srgb: false,
        ..GpuInit::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(formats: Vec<wgpu::TextureFormat>) -> wgpu::SurfaceCapabilities {
        wgpu::SurfaceCapabilities {
            formats,
            alpha_modes: vec![wgpu::CompositeAlphaMode::Opaque],
            ..Default::default()
        }
    }

    #[test]
    fn surface_format_is_not_srgb() {
        let typical = [
            vec![wgpu::TextureFormat::Bgra8UnormSrgb, wgpu::TextureFormat::Bgra8Unorm],
            vec![wgpu::TextureFormat::Bgra8Unorm, wgpu::TextureFormat::Bgra8UnormSrgb],
            vec![wgpu::TextureFormat::Rgba8UnormSrgb, wgpu::TextureFormat::Rgba8Unorm],
        ];
        for formats in typical {
            let format = gpu_init().surface_format(&caps(formats)).expect("surface has formats");
            assert!(!format.is_srgb(), "{format:?}");
        }
    }
}
