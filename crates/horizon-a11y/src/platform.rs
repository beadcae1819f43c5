//! Platform integration through `accesskit_winit`.
//!
//! Assistive technology talks to the window from the platform's own thread.
//! Action requests are queued on a channel and routed into the bridge on the
//! UI thread by [`PlatformAdapter::dispatch_pending`].

use std::cell::RefCell;

use accesskit::{
    ActionHandler, ActionRequest, ActivationHandler, DeactivationHandler, Node, NodeId, Role, Tree,
    TreeUpdate,
};
use accesskit_winit::Adapter;
use crossbeam_channel::{Receiver, Sender};
use horizon_a11y_core::logging::targets;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::bridge::Bridge;

/// Connects a [`Bridge`] to one window's platform accessibility API.
///
/// The window must have been created with `visible(false)`; show it after
/// the adapter exists.
pub struct PlatformAdapter {
    adapter: Adapter,
    actions: Receiver<ActionRequest>,
}

impl PlatformAdapter {
    /// Create an adapter for `window`, rooted at the bridge's root container.
    pub fn new(event_loop: &ActiveEventLoop, window: &Window, bridge: &Bridge) -> Self {
        let (sender, actions) = crossbeam_channel::unbounded();
        let root = bridge.tree().root();

        let adapter = Adapter::with_direct_handlers(
            event_loop,
            window,
            ActivationHandlerImpl {
                root_id: root.id(),
                label: root.label().to_string(),
            },
            ActionHandlerImpl { sender },
            DeactivationHandlerImpl,
        );
        tracing::debug!(target: targets::PLATFORM, root = root.id().0, "platform adapter created");

        Self { adapter, actions }
    }

    /// Forward a window event to the platform adapter.
    pub fn process_event(&mut self, window: &Window, event: &WindowEvent) {
        self.adapter.process_event(window, event);
    }

    /// Push the bridge's current tree if assistive technology is connected.
    pub fn sync(&mut self, bridge: &Bridge) {
        self.adapter.update_if_active(|| bridge.tree_update());
    }

    /// Push a focus-only update if assistive technology is connected.
    pub fn sync_focus(&mut self, bridge: &Bridge) {
        self.adapter.update_if_active(|| bridge.focus_update());
    }

    /// Route queued action requests into the bridge. Returns how many
    /// activations reached a widget.
    ///
    /// The bridge is only borrowed while a request is resolved, so widgets
    /// may notify it from inside [`Item::activate`](horizon_a11y_core::Item::activate).
    pub fn dispatch_pending(&self, bridge: &RefCell<Bridge>) -> usize {
        let mut count = 0;
        for request in self.actions.try_iter() {
            let pending = bridge.borrow().handle_action(&request);
            if let Some(pending) = pending {
                pending.run();
                count += 1;
            }
        }
        if count > 0 {
            tracing::trace!(target: targets::PLATFORM, count, "dispatched action requests");
        }
        count
    }
}

struct ActionHandlerImpl {
    sender: Sender<ActionRequest>,
}

impl ActionHandler for ActionHandlerImpl {
    fn do_action(&mut self, request: ActionRequest) {
        if self.sender.send(request).is_err() {
            tracing::trace!(target: targets::PLATFORM, "adapter gone, dropping action request");
        }
    }
}

struct ActivationHandlerImpl {
    root_id: NodeId,
    label: String,
}

impl ActivationHandler for ActivationHandlerImpl {
    fn request_initial_tree(&mut self) -> Option<TreeUpdate> {
        // Root only; the first sync fills in the children.
        let mut root = Node::new(Role::GenericContainer);
        root.set_label(self.label.clone());

        Some(TreeUpdate {
            nodes: vec![(self.root_id, root)],
            tree: Some(Tree::new(self.root_id)),
            focus: self.root_id,
        })
    }
}

struct DeactivationHandlerImpl;

impl DeactivationHandler for DeactivationHandlerImpl {
    fn deactivate_accessibility(&mut self) {
        tracing::debug!(target: targets::PLATFORM, "assistive technology disconnected");
    }
}
