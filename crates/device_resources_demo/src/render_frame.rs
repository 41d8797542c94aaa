use device_resources::DeviceResources;
use device_resources::Direct3D11;
use device_resources::GraphicsPlatform;
use device_resources::Viewport;
use windows::Win32::Foundation::RECT;

/// Stand-in for the cube renderer: clears each eye's half of the back buffer to a
/// slowly cycling color, then presents.
pub fn render_frame(resources: &DeviceResources<Direct3D11>, frame: u64) {
    let (Some(context), Some(view), Some(viewports)) = (
        resources.context(),
        resources.back_buffer_rtv(),
        resources.viewports(),
    ) else {
        return;
    };

    let targets = [Some(view.clone())];
    unsafe { context.OMSetRenderTargets(Some(targets.as_slice()), None) };

    for (eye, viewport) in viewports.iter().enumerate() {
        // Stereo leaves viewport selection to the renderer, one eye per pass.
        if resources.is_stereo() {
            resources
                .platform()
                .set_viewports(context, std::slice::from_ref(viewport));
        }
        let color = eye_color(eye, frame);
        let rects = [viewport_rect(viewport)];
        unsafe { context.ClearView(view, &color, Some(rects.as_slice())) };
    }

    resources.present();
}

fn eye_color(eye: usize, frame: u64) -> [f32; 4] {
    let phase = (frame % 600) as f32 / 600.0 * std::f32::consts::TAU;
    let offset = eye as f32 * std::f32::consts::FRAC_PI_2;
    [
        0.5 + 0.5 * (phase + offset).sin(),
        0.2,
        0.5 + 0.5 * (phase + offset).cos(),
        1.0,
    ]
}

fn viewport_rect(viewport: &Viewport) -> RECT {
    let bottom_right = viewport.top_left + viewport.size;
    RECT {
        left: viewport.top_left.x as i32,
        top: viewport.top_left.y as i32,
        right: bottom_right.x as i32,
        bottom: bottom_right.y as i32,
    }
}
