//! A [`GraphicsPlatform`] that hands out fake handles and records what happens to them.
//!
//! Every acquisition and release, every viewport binding and every present lands in
//! a shared [`MockLedger`]. Any single step can be made to fail with a chosen code.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ErrorCode;
use crate::platform::GraphicsPlatform;
use crate::swap_chain_description::SwapChainDescription;
use crate::viewport::Viewport;

/// A platform call that can be told to fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    CreateDevice,
    UpgradeDevice,
    UpgradeContext,
    LocateFactory,
    UpgradeFactory,
    CreateSwapChain,
    BackBuffer,
    CreateRenderTargetView,
    Present,
}

impl Step {
    pub const ALL: [Step; 9] = [
        Step::CreateDevice,
        Step::UpgradeDevice,
        Step::UpgradeContext,
        Step::LocateFactory,
        Step::UpgradeFactory,
        Step::CreateSwapChain,
        Step::BackBuffer,
        Step::CreateRenderTargetView,
        Step::Present,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HandleKind {
    BaseDevice,
    BaseContext,
    Device,
    Context,
    DxgiDevice,
    Adapter,
    Factory,
    SwapChainFactory,
    SwapChain,
    Texture,
    RenderTargetView,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Acquired(HandleKind, u64),
    Released(HandleKind, u64),
    ViewportsBound {
        context: u64,
        viewports: Vec<Viewport>,
    },
    BackBufferFetched {
        swap_chain: u64,
        index: u32,
    },
    Presented {
        swap_chain: u64,
        sync_interval: u32,
        flags: u32,
    },
}

#[derive(Default)]
struct Ledger {
    next_id: u64,
    live: BTreeMap<u64, HandleKind>,
    events: Vec<Event>,
}

impl Ledger {
    fn acquire(&mut self, kind: HandleKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.live.insert(id, kind);
        self.events.push(Event::Acquired(kind, id));
        id
    }

    fn release(&mut self, kind: HandleKind, id: u64) {
        let released = self.live.remove(&id);
        assert_eq!(released, Some(kind), "released handle {id} twice");
        self.events.push(Event::Released(kind, id));
    }
}

/// Shared view of everything a [`MockPlatform`] has done.
#[derive(Clone, Default)]
pub struct MockLedger(Rc<RefCell<Ledger>>);

impl MockLedger {
    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    pub fn live_handles(&self) -> Vec<HandleKind> {
        self.0.borrow().live.values().copied().collect()
    }

    pub fn live_count(&self, kind: HandleKind) -> usize {
        self.0.borrow().live.values().filter(|k| **k == kind).count()
    }

    pub fn acquired(&self) -> Vec<HandleKind> {
        self.filter_events(|event| match event {
            Event::Acquired(kind, _) => Some(*kind),
            _ => None,
        })
    }

    /// Released handle kinds, oldest first.
    pub fn released(&self) -> Vec<HandleKind> {
        self.filter_events(|event| match event {
            Event::Released(kind, _) => Some(*kind),
            _ => None,
        })
    }

    /// Each `set_viewports` call, oldest first.
    pub fn bound_viewports(&self) -> Vec<Vec<Viewport>> {
        self.filter_events(|event| match event {
            Event::ViewportsBound { viewports, .. } => Some(viewports.clone()),
            _ => None,
        })
    }

    /// `(context id, viewports)` for each `set_viewports` call, oldest first.
    pub fn viewport_bindings(&self) -> Vec<(u64, Vec<Viewport>)> {
        self.filter_events(|event| match event {
            Event::ViewportsBound { context, viewports } => Some((*context, viewports.clone())),
            _ => None,
        })
    }

    /// `(swap chain id, buffer index)` for each back buffer fetch, oldest first.
    pub fn back_buffer_fetches(&self) -> Vec<(u64, u32)> {
        self.filter_events(|event| match event {
            Event::BackBufferFetched { swap_chain, index } => Some((*swap_chain, *index)),
            _ => None,
        })
    }

    /// `(swap chain id, sync interval, flags)` for each present, oldest first.
    pub fn presents(&self) -> Vec<(u64, u32, u32)> {
        self.filter_events(|event| match event {
            Event::Presented {
                swap_chain,
                sync_interval,
                flags,
            } => Some((*swap_chain, *sync_interval, *flags)),
            _ => None,
        })
    }

    pub fn clear_events(&self) {
        self.0.borrow_mut().events.clear();
    }

    fn filter_events<T>(&self, f: impl FnMut(&Event) -> Option<T>) -> Vec<T> {
        self.0.borrow().events.iter().filter_map(f).collect()
    }

    fn acquire(&self, kind: HandleKind) -> MockHandle {
        let id = self.0.borrow_mut().acquire(kind);
        MockHandle {
            kind,
            id,
            ledger: self.clone(),
        }
    }

    fn assert_live(&self, handle: &MockHandle) {
        let ledger = self.0.borrow();
        assert_eq!(
            ledger.live.get(&handle.id),
            Some(&handle.kind),
            "{:?} {} used after release",
            handle.kind,
            handle.id
        );
    }

    fn record(&self, event: Event) {
        self.0.borrow_mut().events.push(event);
    }
}

/// A fake handle; dropping it records the release.
pub struct MockHandle {
    kind: HandleKind,
    id: u64,
    ledger: MockLedger,
}

impl MockHandle {
    pub fn kind(&self) -> HandleKind {
        self.kind
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        self.ledger.0.borrow_mut().release(self.kind, self.id);
    }
}

impl std::fmt::Debug for MockHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}#{}", self.kind, self.id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MockWindow(pub u64);

#[derive(Debug)]
pub struct MockSwapChain {
    pub handle: MockHandle,
    pub description: SwapChainDescription,
    pub window: MockWindow,
}

#[derive(Default)]
pub struct MockPlatform {
    ledger: MockLedger,
    failures: HashMap<Step, ErrorCode>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call of `step` fail with `code`.
    pub fn failing_at(mut self, step: Step, code: ErrorCode) -> Self {
        self.failures.insert(step, code);
        self
    }

    pub fn ledger(&self) -> MockLedger {
        self.ledger.clone()
    }

    fn check(&self, step: Step) -> Result<(), ErrorCode> {
        match self.failures.get(&step) {
            Some(code) => Err(*code),
            None => Ok(()),
        }
    }

    fn upgrade(&self, step: Step, from: &MockHandle, to: HandleKind) -> Result<MockHandle, ErrorCode> {
        self.ledger.assert_live(from);
        self.check(step)?;
        Ok(self.ledger.acquire(to))
    }
}

impl GraphicsPlatform for MockPlatform {
    type BaseDevice = MockHandle;
    type BaseContext = MockHandle;
    type Device = MockHandle;
    type Context = MockHandle;
    type Factory = MockHandle;
    type SwapChainFactory = MockHandle;
    type SwapChain = MockSwapChain;
    type Texture = MockHandle;
    type RenderTargetView = MockHandle;
    type Window = MockWindow;

    fn create_device(&self) -> Result<(MockHandle, MockHandle), ErrorCode> {
        self.check(Step::CreateDevice)?;
        let device = self.ledger.acquire(HandleKind::BaseDevice);
        let context = self.ledger.acquire(HandleKind::BaseContext);
        Ok((device, context))
    }

    fn upgrade_device(&self, device: &MockHandle) -> Result<MockHandle, ErrorCode> {
        self.upgrade(Step::UpgradeDevice, device, HandleKind::Device)
    }

    fn upgrade_context(&self, context: &MockHandle) -> Result<MockHandle, ErrorCode> {
        self.upgrade(Step::UpgradeContext, context, HandleKind::Context)
    }

    fn locate_factory(&self, device: &MockHandle) -> Result<MockHandle, ErrorCode> {
        self.ledger.assert_live(device);
        let _dxgi_device = self.ledger.acquire(HandleKind::DxgiDevice);
        let _adapter = self.ledger.acquire(HandleKind::Adapter);
        self.check(Step::LocateFactory)?;
        Ok(self.ledger.acquire(HandleKind::Factory))
    }

    fn upgrade_factory(&self, factory: &MockHandle) -> Result<MockHandle, ErrorCode> {
        self.upgrade(Step::UpgradeFactory, factory, HandleKind::SwapChainFactory)
    }

    fn create_swap_chain(
        &self,
        factory: &MockHandle,
        device: &MockHandle,
        window: MockWindow,
        description: &SwapChainDescription,
    ) -> Result<MockSwapChain, ErrorCode> {
        self.ledger.assert_live(factory);
        self.ledger.assert_live(device);
        self.check(Step::CreateSwapChain)?;
        Ok(MockSwapChain {
            handle: self.ledger.acquire(HandleKind::SwapChain),
            description: *description,
            window,
        })
    }

    fn back_buffer(&self, swap_chain: &MockSwapChain, index: u32) -> Result<MockHandle, ErrorCode> {
        self.ledger.assert_live(&swap_chain.handle);
        self.ledger.record(Event::BackBufferFetched {
            swap_chain: swap_chain.handle.id,
            index,
        });
        self.upgrade(Step::BackBuffer, &swap_chain.handle, HandleKind::Texture)
    }

    fn create_render_target_view(
        &self,
        device: &MockHandle,
        texture: &MockHandle,
    ) -> Result<MockHandle, ErrorCode> {
        self.ledger.assert_live(device);
        self.upgrade(Step::CreateRenderTargetView, texture, HandleKind::RenderTargetView)
    }

    fn set_viewports(&self, context: &MockHandle, viewports: &[Viewport]) {
        self.ledger.assert_live(context);
        self.ledger.record(Event::ViewportsBound {
            context: context.id,
            viewports: viewports.to_vec(),
        });
    }

    fn present(&self, swap_chain: &MockSwapChain, sync_interval: u32, flags: u32) -> Result<(), ErrorCode> {
        self.ledger.assert_live(&swap_chain.handle);
        self.ledger.record(Event::Presented {
            swap_chain: swap_chain.handle.id,
            sync_interval,
            flags,
        });
        self.check(Step::Present)
    }
}
