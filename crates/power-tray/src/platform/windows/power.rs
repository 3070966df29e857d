//! Power-configuration API access.
//!
//! Every failure is logged and mapped to "no data": an empty list, `None`,
//! or `false`. Nothing here returns an error to the caller.

use power_tray_core::{PowerSetting, PowerSource, Scheme, SchemeId, SchemeRepository};

use std::{mem, ptr};

use tracing::{debug, instrument, warn};
use uuid::Uuid;
use windows_sys::{
    Win32::{
        Foundation::{ERROR_NO_MORE_ITEMS, ERROR_SUCCESS, LocalFree},
        System::Power::{
            ACCESS_SCHEME, PowerEnumerate, PowerGetActiveScheme, PowerReadACValueIndex,
            PowerReadDCValueIndex, PowerReadFriendlyName, PowerSetActiveScheme,
            PowerWriteACValueIndex, PowerWriteDCValueIndex,
        },
    },
    core::GUID,
};

/// Scheme repository backed by `powrprof`.
#[derive(Debug, Default)]
pub(crate) struct PowerRepository;

fn to_guid(uuid: Uuid) -> GUID {
    GUID::from_u128(uuid.as_u128())
}

fn from_guid(guid: &GUID) -> Uuid {
    Uuid::from_fields(guid.data1, guid.data2, guid.data3, &guid.data4)
}

fn scheme_guid(scheme: &SchemeId) -> Option<GUID> {
    let guid = scheme.to_uuid().map(to_guid);
    if guid.is_none() {
        debug!(scheme_id = %scheme, "Scheme id is not a GUID");
    }
    guid
}

fn friendly_name(scheme: &GUID) -> String {
    let mut size = 0u32;
    // SAFETY: a null buffer asks for the required size only.
    let status = unsafe {
        PowerReadFriendlyName(
            ptr::null_mut(),
            scheme,
            ptr::null(),
            ptr::null(),
            ptr::null_mut(),
            &mut size,
        )
    };
    if status != ERROR_SUCCESS || size == 0 {
        return String::new();
    }

    let mut buffer = vec![0u8; size as usize];
    // SAFETY: `buffer` holds `size` bytes.
    let status = unsafe {
        PowerReadFriendlyName(
            ptr::null_mut(),
            scheme,
            ptr::null(),
            ptr::null(),
            buffer.as_mut_ptr(),
            &mut size,
        )
    };
    if status != ERROR_SUCCESS {
        return String::new();
    }

    let units = buffer
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .take_while(|unit| *unit != 0)
        .collect::<Vec<_>>();
    String::from_utf16_lossy(&units).trim().to_string()
}

impl SchemeRepository for PowerRepository {
    #[instrument(skip(self))]
    fn list_schemes(&self) -> Vec<Scheme> {
        let mut schemes = Vec::new();

        for index in 0.. {
            let mut guid = GUID::from_u128(0);
            let mut size = mem::size_of::<GUID>() as u32;
            // SAFETY: `guid` is a GUID-sized output buffer.
            let status = unsafe {
                PowerEnumerate(
                    ptr::null_mut(),
                    ptr::null(),
                    ptr::null(),
                    ACCESS_SCHEME,
                    index,
                    (&mut guid as *mut GUID).cast::<u8>(),
                    &mut size,
                )
            };
            if status == ERROR_NO_MORE_ITEMS {
                break;
            }
            if status != ERROR_SUCCESS {
                warn!(index, status, "Power scheme enumeration failed");
                break;
            }

            let id = SchemeId::from_uuid(from_guid(&guid));
            schemes.push(Scheme::new(id, friendly_name(&guid)));
        }

        schemes
    }

    fn active_scheme_id(&self) -> Option<SchemeId> {
        let mut active: *mut GUID = ptr::null_mut();
        // SAFETY: on success `active` points at a GUID the caller must free.
        let status = unsafe { PowerGetActiveScheme(ptr::null_mut(), &mut active) };
        if status != ERROR_SUCCESS || active.is_null() {
            debug!(status, "No active power scheme reported");
            return None;
        }

        // SAFETY: checked non-null above; freed exactly once.
        let uuid = unsafe { from_guid(&*active) };
        unsafe { LocalFree(active.cast()) };

        Some(SchemeId::from_uuid(uuid))
    }

    #[instrument(skip(self), fields(scheme_id = %scheme))]
    fn activate_scheme(&self, scheme: &SchemeId) -> bool {
        let Some(guid) = scheme_guid(scheme) else {
            return false;
        };
        // SAFETY: `guid` outlives the call.
        let status = unsafe { PowerSetActiveScheme(ptr::null_mut(), &guid) };
        if status != ERROR_SUCCESS {
            warn!(status, "PowerSetActiveScheme failed");
        }
        status == ERROR_SUCCESS
    }

    fn read_setting(
        &self,
        scheme: &SchemeId,
        setting: PowerSetting,
        source: PowerSource,
    ) -> Option<u32> {
        let scheme = scheme_guid(scheme)?;
        let subgroup = to_guid(setting.subgroup());
        let guid = to_guid(setting.guid());
        let mut value = 0u32;

        // SAFETY: all GUIDs and `value` outlive the call.
        let status = unsafe {
            match source {
                PowerSource::Ac => PowerReadACValueIndex(
                    ptr::null_mut(),
                    &scheme,
                    &subgroup,
                    &guid,
                    &mut value,
                ),
                PowerSource::Dc => PowerReadDCValueIndex(
                    ptr::null_mut(),
                    &scheme,
                    &subgroup,
                    &guid,
                    &mut value,
                ),
            }
        };

        if status != ERROR_SUCCESS {
            debug!(setting = setting.key(), source = source.key(), status, "Setting read failed");
            return None;
        }
        Some(value)
    }

    #[instrument(skip(self), fields(scheme_id = %scheme))]
    fn write_setting(
        &self,
        scheme: &SchemeId,
        setting: PowerSetting,
        source: PowerSource,
        value: u32,
    ) -> bool {
        let Some(scheme) = scheme_guid(scheme) else {
            return false;
        };
        let subgroup = to_guid(setting.subgroup());
        let guid = to_guid(setting.guid());

        // SAFETY: all GUIDs outlive the call.
        let status = unsafe {
            match source {
                PowerSource::Ac => {
                    PowerWriteACValueIndex(ptr::null_mut(), &scheme, &subgroup, &guid, value)
                }
                PowerSource::Dc => {
                    PowerWriteDCValueIndex(ptr::null_mut(), &scheme, &subgroup, &guid, value)
                }
            }
        };

        if status != ERROR_SUCCESS {
            warn!(status, "Setting write failed");
        }
        status == ERROR_SUCCESS
    }
}
