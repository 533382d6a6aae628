//! Change notification for model edits.
//!
//! Plain model values carry no observer list. Wrap a value in [`Observed`] to
//! have every reflective edit reported to registered [`Observer`]s.

use crate::error::Result;
use crate::reflect::{FeatureId, Reflective};
use crate::value::Value;
use crossbeam_channel::{Receiver, Sender};
use std::ops::Deref;

/// Kind of change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// A feature was assigned.
    Set,
    /// A feature was returned to its unset state.
    Unset,
    /// A value was appended to a multi-valued feature.
    Add,
}

/// Description of one change to a model object.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Schema name of the changed type.
    pub type_name: &'static str,
    /// Changed feature.
    pub feature: FeatureId,
    /// Name of the changed feature.
    pub feature_name: &'static str,
    /// Kind of change.
    pub kind: NotificationKind,
    /// Value before the change.
    pub old_value: Option<Value>,
    /// Value after the change, or the appended item for [`NotificationKind::Add`].
    pub new_value: Option<Value>,
}

impl Notification {
    /// Returns true if the change left the value unchanged.
    #[must_use]
    pub fn is_touch(&self) -> bool {
        self.kind != NotificationKind::Add && self.old_value == self.new_value
    }
}

/// Receiver of change notifications.
pub trait Observer: Send + Sync {
    /// Called after every change.
    ///
    /// # Arguments
    /// * `notification` - The change
    fn notify(&self, notification: &Notification);
}

impl<F> Observer for F
where
    F: Fn(&Notification) + Send + Sync,
{
    fn notify(&self, notification: &Notification) {
        self(notification);
    }
}

/// Observer that forwards notifications over a channel.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    sender: Sender<Notification>,
}

impl ChannelObserver {
    /// Creates an observer sending on the given channel.
    #[must_use]
    pub fn new(sender: Sender<Notification>) -> Self {
        Self { sender }
    }

    /// Creates an observer with a fresh unbounded channel.
    ///
    /// # Returns
    /// The observer and the receiving end of its channel.
    #[must_use]
    pub fn unbounded() -> (Self, Receiver<Notification>) {
        let (sender, receiver) = crossbeam_channel::unbounded();
        (Self::new(sender), receiver)
    }
}

impl Observer for ChannelObserver {
    fn notify(&self, notification: &Notification) {
        if self.sender.send(notification.clone()).is_err() {
            tracing::debug!(
                type_name = notification.type_name,
                feature = notification.feature_name,
                "notification receiver disconnected"
            );
        }
    }
}

/// Model value whose reflective edits are reported to observers.
pub struct Observed<T> {
    target: T,
    observers: Vec<Box<dyn Observer>>,
    deliver: bool,
}

impl<T: Reflective> Observed<T> {
    /// Wraps a model value.
    #[must_use]
    pub fn new(target: T) -> Self {
        Self {
            target,
            observers: Vec::new(),
            deliver: true,
        }
    }

    /// Registers an observer.
    pub fn add_observer(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Returns the number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Enables or disables delivery of notifications.
    pub fn set_deliver(&mut self, deliver: bool) {
        self.deliver = deliver;
    }

    /// Returns true if notifications are delivered.
    #[must_use]
    pub fn deliver(&self) -> bool {
        self.deliver
    }

    /// Unwraps the model value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.target
    }

    /// Sets a feature and notifies observers.
    ///
    /// # Errors
    /// Returns the error of the underlying [`Reflective::e_set`].
    pub fn set(&mut self, feature: FeatureId, value: Value) -> Result<()> {
        if !self.delivering() {
            return self.target.e_set(feature, value);
        }
        let old_value = self.target.e_get(feature)?;
        self.target.e_set(feature, value)?;
        let new_value = self.target.e_get(feature)?;
        self.emit(feature, NotificationKind::Set, old_value, new_value)
    }

    /// Unsets a feature and notifies observers.
    ///
    /// # Errors
    /// Returns the error of the underlying [`Reflective::e_unset`].
    pub fn unset(&mut self, feature: FeatureId) -> Result<()> {
        if !self.delivering() {
            return self.target.e_unset(feature);
        }
        let old_value = self.target.e_get(feature)?;
        self.target.e_unset(feature)?;
        let new_value = self.target.e_get(feature)?;
        self.emit(feature, NotificationKind::Unset, old_value, new_value)
    }

    /// Appends a value to a multi-valued feature and notifies observers.
    ///
    /// Only the appended item is converted; existing items are untouched.
    ///
    /// # Errors
    /// Returns the error of the underlying [`Reflective::e_add`].
    pub fn add(&mut self, feature: FeatureId, value: Value) -> Result<()> {
        let item = self.delivering().then(|| value.clone());
        self.target.e_add(feature, value)?;
        self.emit(feature, NotificationKind::Add, None, item)
    }

    /// Applies a typed edit and notifies observers of every feature whose
    /// value or set state changed.
    ///
    /// While notifications are delivered, the target is copied once before
    /// the edit and only changed features are read back as values. Prefer
    /// [`Observed::add`] for growing large lists.
    ///
    /// # Errors
    /// Returns an error if reading the changed features fails.
    pub fn edit<R>(&mut self, edit: impl FnOnce(&mut T) -> R) -> Result<R> {
        if !self.delivering() {
            return Ok(edit(&mut self.target));
        }
        let before = self.target.clone_boxed();
        let result = edit(&mut self.target);

        for def in self.target.features() {
            if self.target.e_eq_feature(def.id, before.as_ref()) {
                continue;
            }
            let old_value = before.e_get(def.id)?;
            let new_value = self.target.e_get(def.id)?;
            let kind = if self.target.e_is_set(def.id)? {
                NotificationKind::Set
            } else {
                NotificationKind::Unset
            };
            self.emit(def.id, kind, old_value, new_value)?;
        }
        Ok(result)
    }

    fn delivering(&self) -> bool {
        self.deliver && !self.observers.is_empty()
    }

    fn emit(
        &self,
        feature: FeatureId,
        kind: NotificationKind,
        old_value: Option<Value>,
        new_value: Option<Value>,
    ) -> Result<()> {
        if !self.delivering() {
            return Ok(());
        }
        let def = self.target.feature_def(feature)?;
        let notification = Notification {
            type_name: self.target.type_name(),
            feature,
            feature_name: def.name,
            kind,
            old_value,
            new_value,
        };
        for observer in &self.observers {
            observer.notify(&notification);
        }
        Ok(())
    }
}

impl<T> Deref for Observed<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.target
    }
}
