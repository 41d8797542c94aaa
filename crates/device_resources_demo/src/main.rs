pub mod command_line;

#[cfg(windows)]
pub mod create_window;
#[cfg(windows)]
pub mod demo_behaviour;
#[cfg(windows)]
pub mod render_frame;
#[cfg(windows)]
pub mod window_class;

use command_line::build_command_line;
use eyre::Result;
use tracing::info;

fn init_logging() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::SubscriberBuilder::default()
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .with_target(false)
        .init();
    Ok(())
}

#[cfg(windows)]
pub fn main() -> Result<()> {
    use create_window::create_window;
    use create_window::get_handle_to_file_used_to_create_the_calling_process;
    use create_window::register_window_class;
    use demo_behaviour::DemoBehaviour;
    use device_resources::DeviceResources;
    use device_resources::Direct3D11;
    use device_resources::SwapChainDescription;
    use device_resources::config::FRAME_BUFFER_SIZE;
    use eyre::WrapErr;
    use render_frame::render_frame;
    use window_class::create_window_class_struct;
    use windows::Win32::UI::WindowsAndMessaging::*;
    use windows::core::w;

    init_logging()?;
    let command_line = build_command_line();
    info!(stereo = command_line.stereo, "Starting device resources demo");

    let our_module = get_handle_to_file_used_to_create_the_calling_process()?;
    let window_class = create_window_class_struct::<DemoBehaviour>(our_module)?;
    register_window_class(&window_class)?;

    // The window's client area matches the back buffer, both eyes side by side.
    let back_buffer = SwapChainDescription::for_frame(command_line.stereo, FRAME_BUFFER_SIZE);
    let title = match command_line.stereo {
        true => w!("Device Resources (Stereo)"),
        false => w!("Device Resources"),
    };
    let mut behaviour = DemoBehaviour::default();
    let hwnd = create_window(
        our_module,
        (back_buffer.width, back_buffer.height),
        title,
        &mut behaviour,
    )?;

    let mut resources = DeviceResources::new(Direct3D11, command_line.stereo)
        .wrap_err("Creating the Direct3D 11 device")?;
    if let Some(device) = resources.device() {
        match device_resources::direct3d11::adapter_name(device) {
            Ok(name) => info!("Using hardware adapter: {}", name),
            Err(code) => info!(%code, "Adapter name unavailable"),
        }
    }
    resources
        .attach(hwnd)
        .wrap_err("Attaching device resources to the window")?;
    info!(
        width = resources.output_size().x,
        height = resources.output_size().y,
        "Attached to window"
    );

    unsafe { _ = ShowWindow(hwnd, SW_SHOW) };

    let mut frame: u64 = 0;
    let mut done = false;
    while !done {
        let mut message = MSG::default();

        if unsafe { PeekMessageW(&mut message, None, 0, 0, PM_REMOVE) }.into() {
            unsafe {
                _ = TranslateMessage(&message);
                DispatchMessageW(&message);
            }

            if message.message == WM_QUIT {
                done = true;
            }
        } else {
            render_frame(&resources, frame);
            if !behaviour.paused {
                frame += 1;
            }
        }
    }

    info!(frames = frame, "Shutting down");
    Ok(())
}

#[cfg(not(windows))]
pub fn main() -> Result<()> {
    init_logging()?;
    let command_line = build_command_line();
    info!(stereo = command_line.stereo, "Starting device resources demo");
    eyre::bail!("this demo needs a Direct3D 11 capable Windows host")
}
