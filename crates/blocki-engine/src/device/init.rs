use super::surface;

/// Initialization parameters for the GPU layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Backend sets tried in order until one yields an adapter and device.
    ///
    /// The default tries the native primary APIs first and falls back to GL
    /// (the WebGL / GLES path).
    pub backends: Vec<wgpu::Backends>,

    /// Whether the surface format should be sRGB.
    ///
    /// With `true` the hardware encodes shader output as linear color; with
    /// `false` shader output is written to the display as is. Either way the
    /// other kind of format is used when the surface offers no match.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior).
    ///
    /// FIFO ties the frame cadence to the display refresh.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    ///
    /// Defaults to the WebGL2 downlevel set so the GL fallback qualifies.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface.
    ///
    /// This value is a hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,

    /// Depth attachment format, or `None` to render without depth.
    pub depth_format: Option<wgpu::TextureFormat>,
}

impl GpuInit {
    /// Surface format this configuration picks from `caps`.
    pub fn surface_format(&self, caps: &wgpu::SurfaceCapabilities) -> Option<wgpu::TextureFormat> {
        surface::choose_surface_format(caps, self.prefer_srgb)
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            backends: vec![wgpu::Backends::PRIMARY, wgpu::Backends::GL],
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
            desired_maximum_frame_latency: 2,
            depth_format: Some(wgpu::TextureFormat::Depth32Float),
        }
    }
}
