use crate::window::{ContextVersion, WindowConfig};

/// Device limit tier derived from the requested context version.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LimitTier {
    /// GLES 3.0 / WebGL2-class hardware.
    WebGl2,
    /// GL 4.3 / GLES 3.1 / D3D11-class hardware.
    Downlevel,
    /// Full wgpu default limits.
    Full,
    /// Everything the selected adapter reports.
    Adapter,
}

impl LimitTier {
    /// Picks the tier for a context request.
    ///
    /// `< 4.3` maps to WebGL2 limits, `4.3 ..< 4.6` to downlevel limits and
    /// anything newer to the full defaults. `use_latest` overrides the version.
    pub fn for_context(version: ContextVersion, use_latest: bool) -> Self {
        if use_latest {
            LimitTier::Adapter
        } else if version < ContextVersion::new(4, 3) {
            LimitTier::WebGl2
        } else if version < ContextVersion::new(4, 6) {
            LimitTier::Downlevel
        } else {
            LimitTier::Full
        }
    }

    /// Resolves concrete limits against the adapter.
    ///
    /// Downlevel tiers keep the adapter's texture resolution so large
    /// framebuffers stay usable.
    pub fn resolve(self, adapter: &wgpu::Adapter) -> wgpu::Limits {
        match self {
            LimitTier::WebGl2 => {
                wgpu::Limits::downlevel_webgl2_defaults().using_resolution(adapter.limits())
            }
            LimitTier::Downlevel => {
                wgpu::Limits::downlevel_defaults().using_resolution(adapter.limits())
            }
            LimitTier::Full => wgpu::Limits::default(),
            LimitTier::Adapter => adapter.limits(),
        }
    }
}

/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Present mode (swap behavior). Derived from the vsync flag.
    pub present_mode: wgpu::PresentMode,

    /// Limits requested from the device.
    pub limits: LimitTier,

    /// Multisample count for the color target; 1 disables MSAA.
    pub sample_count: u32,

    /// Desired maximum frame latency for the surface (a hint).
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            present_mode: wgpu::PresentMode::AutoVsync,
            limits: LimitTier::Full,
            sample_count: 1,
            desired_maximum_frame_latency: 2,
        }
    }
}

impl GpuInit {
    pub fn from_config(config: &WindowConfig) -> Self {
        Self {
            present_mode: if config.vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            limits: LimitTier::for_context(config.context_version, config.use_latest_context),
            sample_count: config.sample_count(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_version_selects_tier() {
        let tier = |maj, min| LimitTier::for_context(ContextVersion::new(maj, min), false);
        assert_eq!(tier(3, 3), LimitTier::WebGl2);
        assert_eq!(tier(4, 2), LimitTier::WebGl2);
        assert_eq!(tier(4, 3), LimitTier::Downlevel);
        assert_eq!(tier(4, 5), LimitTier::Downlevel);
        assert_eq!(tier(4, 6), LimitTier::Full);
        assert_eq!(
            LimitTier::for_context(ContextVersion::new(3, 3), true),
            LimitTier::Adapter
        );
    }

    #[test]
    fn config_maps_to_gpu_init() {
        let init = GpuInit::from_config(&WindowConfig::default().vsync(false).msaa_samples(4));
        assert_eq!(init.present_mode, wgpu::PresentMode::AutoNoVsync);
        assert_eq!(init.sample_count, 4);

        let init = GpuInit::from_config(&WindowConfig::default());
        assert_eq!(init.present_mode, wgpu::PresentMode::AutoVsync);
        assert_eq!(init.sample_count, 1);
        assert_eq!(init.limits, LimitTier::WebGl2);
    }
}
