use super::helpers;
use wgpu;

pub(crate) const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;
pub(crate) const LDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Offscreen color targets for the post chain.
///
/// - `hdr_*`: full-resolution scene color in Rgba16Float.
/// - `bloom_*`: half-resolution ping-pong pair for bright-pass and blur.
/// - `ping_*`/`pong_*`: full-resolution LDR pair the tonemapped image bounces
///   through between the fullscreen effects.
pub(crate) struct RenderTargets {
    pub(crate) hdr_tex: wgpu::Texture,
    pub(crate) hdr_view: wgpu::TextureView,
    pub(crate) bloom_a: wgpu::Texture,
    pub(crate) bloom_a_view: wgpu::TextureView,
    pub(crate) bloom_b: wgpu::Texture,
    pub(crate) bloom_b_view: wgpu::TextureView,
    pub(crate) ping_tex: wgpu::Texture,
    pub(crate) ping_view: wgpu::TextureView,
    pub(crate) pong_tex: wgpu::Texture,
    pub(crate) pong_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn create(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let usage = wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        let (hdr_tex, hdr_view) =
            helpers::create_color_texture(device, "hdr_tex", width, height, HDR_FORMAT, usage);
        let bw = (width.max(1) / 2).max(1);
        let bh = (height.max(1) / 2).max(1);
        let (bloom_a, bloom_a_view) =
            helpers::create_color_texture(device, "bloom_a", bw, bh, HDR_FORMAT, usage);
        let (bloom_b, bloom_b_view) =
            helpers::create_color_texture(device, "bloom_b", bw, bh, HDR_FORMAT, usage);
        let (ping_tex, ping_view) =
            helpers::create_color_texture(device, "post_ping", width, height, LDR_FORMAT, usage);
        let (pong_tex, pong_view) =
            helpers::create_color_texture(device, "post_pong", width, height, LDR_FORMAT, usage);
        Self {
            hdr_tex,
            hdr_view,
            bloom_a,
            bloom_a_view,
            bloom_b,
            bloom_b_view,
            ping_tex,
            ping_view,
            pong_tex,
            pong_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::create(device, width, height);
    }
}
