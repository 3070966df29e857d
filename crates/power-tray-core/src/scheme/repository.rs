use crate::{PowerSetting, PowerSource, Scheme, SchemeId};

use std::sync::Arc;

/// Boundary to the OS power-configuration store.
///
/// Implementations must fail soft: enumeration and reads return empty or
/// `None` on any failure, writes return `false`. Nothing is thrown past
/// this boundary.
pub trait SchemeRepository {
    /// Enumerate schemes with their friendly names. `is_active` is ignored.
    fn list_schemes(&self) -> Vec<Scheme>;

    /// Scheme the OS currently reports as active.
    fn active_scheme_id(&self) -> Option<SchemeId>;

    /// Ask the OS to activate a scheme. Best-effort.
    fn activate_scheme(&self, id: &SchemeId) -> bool;

    /// Read a per-scheme setting value (action index or seconds).
    fn read_setting(
        &self,
        scheme: &SchemeId,
        setting: PowerSetting,
        source: PowerSource,
    ) -> Option<u32>;

    /// Write a per-scheme setting value. Best-effort.
    fn write_setting(
        &self,
        scheme: &SchemeId,
        setting: PowerSetting,
        source: PowerSource,
        value: u32,
    ) -> bool;
}

impl<T: SchemeRepository + ?Sized> SchemeRepository for Arc<T> {
    fn list_schemes(&self) -> Vec<Scheme> {
        (**self).list_schemes()
    }

    fn active_scheme_id(&self) -> Option<SchemeId> {
        (**self).active_scheme_id()
    }

    fn activate_scheme(&self, id: &SchemeId) -> bool {
        (**self).activate_scheme(id)
    }

    fn read_setting(
        &self,
        scheme: &SchemeId,
        setting: PowerSetting,
        source: PowerSource,
    ) -> Option<u32> {
        (**self).read_setting(scheme, setting, source)
    }

    fn write_setting(
        &self,
        scheme: &SchemeId,
        setting: PowerSetting,
        source: PowerSource,
        value: u32,
    ) -> bool {
        (**self).write_setting(scheme, setting, source, value)
    }
}

/// OS session conditions that forbid power-plan writes.
pub trait SessionProbe {
    /// The OS has started shutting down or logging off.
    fn shutdown_started(&self) -> bool;

    /// The process runs in a remote/terminal session.
    fn is_remote_session(&self) -> bool;
}

impl<T: SessionProbe + ?Sized> SessionProbe for Arc<T> {
    fn shutdown_started(&self) -> bool {
        (**self).shutdown_started()
    }

    fn is_remote_session(&self) -> bool {
        (**self).is_remote_session()
    }
}
