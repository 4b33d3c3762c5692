use anyhow::{anyhow, Context, Result};
use log::info;

use crate::models::BatteryReading;
use crate::platform::common::{checked_command_stdout, command_exists, CommandLister};
use crate::platform::{BrightnessControl, VolumeControl};
use crate::reporters::network::ListingFormat;

/// `netsh wlan show interfaces` lists both `BSSID` and `SSID`; only the
/// latter is the network name.
pub const WIFI_LISTING_FORMAT: ListingFormat = ListingFormat {
    marker: "SSID",
    excluded: Some("BSSID"),
    strip_quotes: false,
};

const BRIGHTNESS_QUERY: &str =
    "(Get-CimInstance -Namespace root/WMI -ClassName WmiMonitorBrightness).CurrentBrightness";

// SYSTEM_POWER_STATUS sentinel values
const BATTERY_FLAG_NO_BATTERY: u8 = 128;
const BATTERY_FLAG_UNKNOWN: u8 = 255;
const BATTERY_PERCENT_UNKNOWN: u8 = 255;
const AC_LINE_ONLINE: u8 = 1;

pub fn wifi_lister() -> CommandLister {
    CommandLister::new("netsh", &["wlan", "show", "interfaces"])
}

/// Turn the raw `SYSTEM_POWER_STATUS` fields into a reading
pub fn interpret_power_status(
    ac_line_status: u8,
    battery_flag: u8,
    battery_life_percent: u8,
) -> Result<Option<BatteryReading>> {
    if battery_flag & BATTERY_FLAG_NO_BATTERY != 0 || battery_flag == BATTERY_FLAG_UNKNOWN {
        return Ok(None);
    }
    if battery_life_percent == BATTERY_PERCENT_UNKNOWN {
        return Err(anyhow!("Battery charge level is unknown"));
    }

    Ok(Some(BatteryReading {
        percent: battery_life_percent.min(100),
        plugged: ac_line_status == AC_LINE_ONLINE,
    }))
}

/// Battery state via `GetSystemPowerStatus`
#[cfg(target_os = "windows")]
pub struct PowerStatusBattery;

#[cfg(target_os = "windows")]
impl crate::platform::BatterySensor for PowerStatusBattery {
    fn read(&self) -> Result<Option<BatteryReading>> {
        use winapi::um::winbase::{GetSystemPowerStatus, SYSTEM_POWER_STATUS};

        let mut status: SYSTEM_POWER_STATUS = unsafe { std::mem::zeroed() };
        // SAFETY: status is a valid, writable SYSTEM_POWER_STATUS
        let ok = unsafe { GetSystemPowerStatus(&mut status) };
        if ok == 0 {
            return Err(anyhow!(
                "GetSystemPowerStatus failed: {}",
                std::io::Error::last_os_error()
            ));
        }

        interpret_power_status(
            status.ACLineStatus,
            status.BatteryFlag,
            status.BatteryLifePercent,
        )
    }
}

/// Monitor brightness through WMI, queried with PowerShell
pub struct WmiBrightness {
    available: bool,
}

impl WmiBrightness {
    pub fn new() -> Self {
        let available = command_exists("powershell");
        if !available {
            info!("PowerShell not found - brightness reporting disabled");
        }
        Self { available }
    }
}

impl BrightnessControl for WmiBrightness {
    fn is_available(&self) -> bool {
        self.available
    }

    fn brightness(&self) -> Result<Vec<u32>> {
        let output = checked_command_stdout(
            "powershell",
            &["-NoProfile", "-NonInteractive", "-Command", BRIGHTNESS_QUERY],
        )?;
        parse_brightness_lines(&output)
    }
}

/// One integer per line, one line per monitor
pub fn parse_brightness_lines(output: &str) -> Result<Vec<u32>> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.parse::<u32>()
                .context(format!("Unexpected brightness value: {}", line))
        })
        .collect()
}

/// Master volume of the default render endpoint (`IAudioEndpointVolume`)
pub struct EndpointVolume {
    available: bool,
}

impl EndpointVolume {
    pub fn new() -> Self {
        let available = match master_volume_scalar() {
            Ok(_) => true,
            Err(e) => {
                info!("No default audio endpoint - volume reporting disabled: {:#}", e);
                false
            }
        };
        Self { available }
    }
}

impl VolumeControl for EndpointVolume {
    fn is_available(&self) -> bool {
        self.available
    }

    fn volume(&self) -> Result<u32> {
        scalar_to_percent(master_volume_scalar()?)
    }
}

/// Convert an endpoint volume scalar in `0.0..=1.0` to whole percent
pub fn scalar_to_percent(level: f32) -> Result<u32> {
    if !level.is_finite() || !(0.0..=1.0).contains(&level) {
        return Err(anyhow!("Volume scalar out of range: {}", level));
    }
    Ok((level * 100.0).round() as u32)
}

#[cfg(not(target_os = "windows"))]
fn master_volume_scalar() -> Result<f32> {
    Err(anyhow!("Audio endpoints are only available on Windows"))
}

#[cfg(target_os = "windows")]
fn master_volume_scalar() -> Result<f32> {
    use std::ptr;
    use winapi::shared::winerror::{FAILED, RPC_E_CHANGED_MODE};
    use winapi::um::combaseapi::{CoInitializeEx, CoUninitialize};
    use winapi::um::objbase::COINIT_MULTITHREADED;

    // SAFETY: balanced with CoUninitialize when initialization succeeded
    let init = unsafe { CoInitializeEx(ptr::null_mut(), COINIT_MULTITHREADED) };
    // A thread already initialized as STA can still use the endpoint API
    if FAILED(init) && init != RPC_E_CHANGED_MODE {
        return Err(anyhow!("CoInitializeEx failed: {:#010x}", init));
    }

    let result = unsafe { endpoint::query_master_volume() };

    if !FAILED(init) {
        unsafe { CoUninitialize() };
    }
    result
}

#[cfg(target_os = "windows")]
mod endpoint {
    use std::ptr;

    use anyhow::{anyhow, Result};
    use winapi::shared::minwindef::LPVOID;
    use winapi::shared::ntdef::HRESULT;
    use winapi::shared::winerror::FAILED;
    use winapi::um::combaseapi::{CoCreateInstance, CLSCTX_ALL};
    use winapi::um::endpointvolume::IAudioEndpointVolume;
    use winapi::um::mmdeviceapi::{
        eConsole, eRender, CLSID_MMDeviceEnumerator, IMMDevice, IMMDeviceEnumerator,
    };
    use winapi::Interface;

    fn check(hr: HRESULT, call: &str) -> Result<()> {
        if FAILED(hr) {
            return Err(anyhow!("{} failed: {:#010x}", call, hr));
        }
        Ok(())
    }

    /// Must be called on a thread with COM initialized. Every interface
    /// obtained here is released before returning.
    pub(super) unsafe fn query_master_volume() -> Result<f32> {
        let mut enumerator: *mut IMMDeviceEnumerator = ptr::null_mut();
        check(
            CoCreateInstance(
                &CLSID_MMDeviceEnumerator,
                ptr::null_mut(),
                CLSCTX_ALL,
                &IMMDeviceEnumerator::uuidof(),
                &mut enumerator as *mut *mut IMMDeviceEnumerator as *mut LPVOID,
            ),
            "CoCreateInstance(MMDeviceEnumerator)",
        )?;

        let mut device: *mut IMMDevice = ptr::null_mut();
        let hr = (*enumerator).GetDefaultAudioEndpoint(eRender, eConsole, &mut device);
        (*enumerator).Release();
        check(hr, "GetDefaultAudioEndpoint")?;

        let mut volume: *mut IAudioEndpointVolume = ptr::null_mut();
        let hr = (*device).Activate(
            &IAudioEndpointVolume::uuidof(),
            CLSCTX_ALL,
            ptr::null_mut(),
            &mut volume as *mut *mut IAudioEndpointVolume as *mut LPVOID,
        );
        (*device).Release();
        check(hr, "IMMDevice::Activate")?;

        let mut level = 0.0f32;
        let hr = (*volume).GetMasterVolumeLevelScalar(&mut level);
        (*volume).Release();
        check(hr, "GetMasterVolumeLevelScalar")?;

        Ok(level)
    }
}
