use bevy_math::UVec2;
use bevy_math::Vec2;

use super::DeviceResources;
use crate::config::FRAME_BUFFER_HEIGHT;
use crate::config::FRAME_BUFFER_WIDTH;
use crate::error::ErrorCode;
use crate::error::ErrorKind;
use crate::mock::HandleKind;
use crate::mock::MockLedger;
use crate::mock::MockPlatform;
use crate::mock::MockWindow;
use crate::mock::Step;
use crate::viewport::Viewport;

const WINDOW: MockWindow = MockWindow(0x1234);
const FRAME: Vec2 = Vec2::new(FRAME_BUFFER_WIDTH as f32, FRAME_BUFFER_HEIGHT as f32);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

fn attached(stereo: bool) -> (DeviceResources<MockPlatform>, MockLedger) {
    init_tracing();
    let platform = MockPlatform::new();
    let ledger = platform.ledger();
    let mut resources = DeviceResources::new(platform, stereo).expect("device creation");
    resources.attach(WINDOW).expect("attach");
    (resources, ledger)
}

fn expected_kind(step: Step) -> Option<ErrorKind> {
    match step {
        Step::CreateDevice | Step::UpgradeDevice => Some(ErrorKind::DeviceUnavailable),
        Step::LocateFactory | Step::UpgradeFactory | Step::CreateSwapChain => {
            Some(ErrorKind::SwapChainCreation)
        }
        Step::BackBuffer | Step::CreateRenderTargetView => Some(ErrorKind::BufferAcquisition),
        Step::UpgradeContext | Step::Present => None,
    }
}

#[test]
fn mono_attach_binds_one_full_viewport() {
    let (resources, ledger) = attached(false);

    let swap_chain = resources.swap_chain().unwrap();
    assert_eq!(swap_chain.description.width, 1280);
    assert_eq!(swap_chain.description.height, 720);
    assert_eq!(swap_chain.window, WINDOW);

    let viewports = resources.viewports().unwrap();
    assert_eq!(viewports.as_slice(), &[Viewport::new(Vec2::ZERO, FRAME)]);
    let context_id = resources.context().unwrap().id();
    assert_eq!(
        ledger.viewport_bindings(),
        vec![(context_id, vec![Viewport::new(Vec2::ZERO, FRAME)])]
    );

    assert_eq!(resources.output_size(), UVec2::new(1280, 720));
    assert!(!resources.is_stereo());
}

#[test]
fn stereo_attach_doubles_the_buffer_and_binds_nothing() {
    let (resources, ledger) = attached(true);

    let swap_chain = resources.swap_chain().unwrap();
    assert_eq!(swap_chain.description.width, 2560);
    assert_eq!(swap_chain.description.height, 720);

    let viewports = resources.viewports().unwrap();
    assert_eq!(
        viewports.as_slice(),
        &[
            Viewport::new(Vec2::ZERO, FRAME),
            Viewport::new(Vec2::new(1280.0, 0.0), FRAME),
        ]
    );
    assert!(ledger.bound_viewports().is_empty());

    assert_eq!(resources.output_size(), UVec2::new(1280, 720));
    assert!(resources.is_stereo());
}

#[test]
fn output_size_is_per_eye_and_zero_before_attach() {
    for stereo in [false, true] {
        let resources = DeviceResources::new(MockPlatform::new(), stereo).unwrap();
        assert_eq!(resources.output_size(), UVec2::ZERO);

        let (resources, _) = attached(stereo);
        assert_eq!(
            resources.output_size(),
            UVec2::new(FRAME_BUFFER_WIDTH, FRAME_BUFFER_HEIGHT)
        );
    }
}

#[test]
fn device_creation_failure_is_returned_verbatim() {
    let code = ErrorCode(0x887A_0004_u32 as i32);
    let platform = MockPlatform::new().failing_at(Step::CreateDevice, code);
    let ledger = platform.ledger();

    let (resources, status) = DeviceResources::new_partial(platform, false);
    let error = status.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::DeviceUnavailable);
    assert_eq!(error.code(), code);

    assert!(resources.device().is_none());
    assert!(resources.context().is_none());
    assert!(resources.swap_chain().is_none());
    assert!(resources.back_buffer_rtv().is_none());
    assert!(resources.viewports().is_none());

    drop(resources);
    assert!(ledger.live_handles().is_empty());
    assert!(ledger.acquired().is_empty());
}

#[test]
fn strict_constructor_fails_on_device_upgrade() {
    let platform = MockPlatform::new().failing_at(Step::UpgradeDevice, ErrorCode::E_NOINTERFACE);
    let ledger = platform.ledger();

    let error = DeviceResources::new(platform, true).err().unwrap();
    assert_eq!(error.kind(), ErrorKind::DeviceUnavailable);
    assert_eq!(error.code(), ErrorCode::E_NOINTERFACE);
    assert!(ledger.live_handles().is_empty());
}

#[test]
fn refused_context_upgrade_is_swallowed() {
    let platform = MockPlatform::new().failing_at(Step::UpgradeContext, ErrorCode::E_NOINTERFACE);
    let ledger = platform.ledger();

    let mut resources = DeviceResources::new(platform, false).unwrap();
    assert!(resources.device().is_some());
    assert!(resources.context().is_none());

    // The mono viewport is still created, there is just nothing to bind it on.
    resources.attach(WINDOW).unwrap();
    assert_eq!(resources.viewports().unwrap().len(), 1);
    assert!(ledger.bound_viewports().is_empty());
}

#[test]
fn swap_chain_failure_still_releases_device_and_context() {
    let code = ErrorCode::DXGI_ERROR_INVALID_CALL;
    let platform = MockPlatform::new().failing_at(Step::CreateSwapChain, code);
    let ledger = platform.ledger();

    let mut resources = DeviceResources::new(platform, false).unwrap();
    let error = resources.attach(WINDOW).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::SwapChainCreation);
    assert_eq!(error.code(), code);
    assert!(resources.swap_chain().is_none());
    assert!(resources.device().is_some());
    assert!(resources.context().is_some());

    drop(resources);
    assert!(ledger.live_handles().is_empty());
    let released = ledger.released();
    let tail = &released[released.len() - 2..];
    assert_eq!(tail, &[HandleKind::Context, HandleKind::Device]);
}

#[test]
fn render_target_view_failure_keeps_the_swap_chain() {
    let platform = MockPlatform::new().failing_at(Step::CreateRenderTargetView, ErrorCode::E_FAIL);
    let ledger = platform.ledger();

    let mut resources = DeviceResources::new(platform, true).unwrap();
    let error = resources.attach(WINDOW).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::BufferAcquisition);
    assert!(resources.swap_chain().is_some());
    assert!(resources.back_buffer_rtv().is_none());
    assert!(resources.viewports().is_none());
    assert_eq!(resources.output_size(), UVec2::ZERO);
    assert_eq!(ledger.live_count(HandleKind::Texture), 0);
}

#[test]
fn render_target_view_is_created_over_buffer_zero() {
    for stereo in [false, true] {
        let (resources, ledger) = attached(stereo);
        let swap_chain_id = resources.swap_chain().unwrap().handle.id();
        assert_eq!(
            ledger.back_buffer_fetches(),
            vec![(swap_chain_id, 0)],
            "stereo={stereo}"
        );
    }
}

#[test]
fn present_uses_vsync_once_per_call() {
    let (resources, ledger) = attached(false);
    let swap_chain_id = resources.swap_chain().unwrap().handle.id();

    resources.present();
    assert_eq!(ledger.presents(), vec![(swap_chain_id, 1, 0)]);
    resources.present();
    resources.present();
    assert_eq!(ledger.presents().len(), 3);
}

#[test]
fn present_failure_is_dropped() {
    let platform = MockPlatform::new().failing_at(Step::Present, ErrorCode::E_FAIL);
    let ledger = platform.ledger();
    let mut resources = DeviceResources::new(platform, false).unwrap();
    resources.attach(WINDOW).unwrap();

    resources.present();
    assert_eq!(ledger.presents().len(), 1);
    assert!(resources.swap_chain().is_some());
}

#[test]
fn present_before_attach_does_nothing() {
    let platform = MockPlatform::new();
    let ledger = platform.ledger();
    let resources = DeviceResources::new(platform, false).unwrap();
    resources.present();
    assert!(ledger.presents().is_empty());
}

#[test]
fn accessors_return_the_same_handles_every_call() {
    let (resources, _ledger) = attached(true);

    let device = resources.device().unwrap();
    let swap_chain = resources.swap_chain().unwrap();
    let view = resources.back_buffer_rtv().unwrap();
    let viewports = resources.viewports().unwrap();
    resources.present();

    assert!(std::ptr::eq(device, resources.device().unwrap()));
    assert!(std::ptr::eq(resources.context().unwrap(), resources.context().unwrap()));
    assert!(std::ptr::eq(swap_chain, resources.swap_chain().unwrap()));
    assert!(std::ptr::eq(view, resources.back_buffer_rtv().unwrap()));
    assert!(std::ptr::eq(viewports, resources.viewports().unwrap()));
    assert_eq!(device.id(), resources.device().unwrap().id());
    assert_eq!(view.id(), resources.back_buffer_rtv().unwrap().id());
}

#[test]
fn transient_handles_do_not_outlive_their_step() {
    let (resources, ledger) = attached(false);

    let mut live = ledger.live_handles();
    live.sort();
    assert_eq!(
        live,
        vec![
            HandleKind::Device,
            HandleKind::Context,
            HandleKind::SwapChain,
            HandleKind::RenderTargetView,
        ]
    );
    for transient in [
        HandleKind::BaseDevice,
        HandleKind::BaseContext,
        HandleKind::DxgiDevice,
        HandleKind::Adapter,
        HandleKind::Factory,
        HandleKind::SwapChainFactory,
        HandleKind::Texture,
    ] {
        assert!(ledger.acquired().contains(&transient), "{transient:?} never acquired");
        assert_eq!(ledger.live_count(transient), 0, "{transient:?} still live");
    }
    drop(resources);
}

#[test]
fn drop_releases_in_reverse_order() {
    let (resources, ledger) = attached(false);
    ledger.clear_events();

    drop(resources);
    assert_eq!(
        ledger.released(),
        vec![
            HandleKind::Context,
            HandleKind::RenderTargetView,
            HandleKind::SwapChain,
            HandleKind::Device,
        ]
    );
}

#[test]
fn construct_then_drop_leaves_nothing_live() {
    for stereo in [false, true] {
        let platform = MockPlatform::new();
        let ledger = platform.ledger();
        let resources = DeviceResources::new(platform, stereo).unwrap();
        assert_eq!(ledger.live_count(HandleKind::Device), 1);
        assert_eq!(ledger.live_count(HandleKind::Context), 1);

        drop(resources);
        assert!(ledger.live_handles().is_empty());
    }
}

#[test]
fn attaching_again_replaces_the_window_resources() {
    let (mut resources, ledger) = attached(false);
    let first = resources.swap_chain().unwrap().handle.id();

    resources.attach(MockWindow(0x5678)).unwrap();
    let second = resources.swap_chain().unwrap();
    assert_ne!(second.handle.id(), first);
    assert_eq!(second.window, MockWindow(0x5678));
    assert_eq!(ledger.live_count(HandleKind::SwapChain), 1);
    assert_eq!(ledger.live_count(HandleKind::RenderTargetView), 1);
    assert_eq!(ledger.bound_viewports().len(), 2);
}

#[test]
fn attach_without_a_device_reports_it() {
    let platform = MockPlatform::new().failing_at(Step::UpgradeDevice, ErrorCode::E_NOINTERFACE);
    let (mut resources, status) = DeviceResources::new_partial(platform, false);
    assert!(status.is_err());

    let error = resources.attach(WINDOW).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::DeviceUnavailable);
    assert_eq!(error.code(), ErrorCode::E_POINTER);
}

#[test]
fn any_failing_step_tears_down_cleanly() {
    init_tracing();
    let code = ErrorCode(0x8876_0001_u32 as i32);
    for stereo in [false, true] {
        for step in Step::ALL {
            let platform = MockPlatform::new().failing_at(step, code);
            let ledger = platform.ledger();

            let (mut resources, status) = DeviceResources::new_partial(platform, stereo);
            let outcome = status.and_then(|()| resources.attach(WINDOW));
            resources.present();

            match expected_kind(step) {
                Some(kind) => {
                    let error = outcome.unwrap_err();
                    assert_eq!(error.kind(), kind, "{step:?} stereo={stereo}");
                    assert_eq!(error.code(), code, "{step:?} stereo={stereo}");
                }
                None => assert!(outcome.is_ok(), "{step:?} stereo={stereo}"),
            }

            drop(resources);
            assert!(
                ledger.live_handles().is_empty(),
                "{step:?} stereo={stereo} leaked {:?}",
                ledger.live_handles()
            );
        }
    }
}

#[test]
fn successful_attach_is_consistent_in_both_modes() {
    for stereo in [false, true] {
        let (resources, ledger) = attached(stereo);
        let swap_chain = resources.swap_chain().unwrap();
        let viewports = resources.viewports().unwrap();

        // The viewports cover the back buffer exactly.
        let covered: f32 = viewports.iter().map(|viewport| viewport.size.x).sum();
        assert_eq!(covered, swap_chain.description.width as f32);
        assert!(viewports
            .iter()
            .all(|viewport| viewport.size.y == swap_chain.description.height as f32));
        assert_eq!(viewports.is_stereo(), stereo);

        let bound = ledger.bound_viewports();
        if stereo {
            assert!(bound.is_empty());
        } else {
            assert_eq!(bound, vec![viewports.to_vec()]);
            let context_id = resources.context().unwrap().id();
            assert_eq!(
                ledger.viewport_bindings(),
                vec![(context_id, viewports.to_vec())]
            );
        }
    }
}
