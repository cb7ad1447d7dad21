//! Capture flows layered over the active view as popovers.

use super::traits::{CustomWidgetRef, EventHandler};

pub mod entry_capture;
pub mod habit_capture;
pub mod note_capture;

/// A popover capture flow. Modals swallow all events while open.
pub trait ModalView: EventHandler + CustomWidgetRef {}

impl ModalView for entry_capture::EntryCaptureView {}
impl ModalView for habit_capture::HabitCaptureView {}
impl ModalView for note_capture::NoteCaptureView {}
