//! Integration tests for Wi-Fi name extraction against real command output.

use startup_report::platform::{linux, macos, windows};
use startup_report::reporters::network::parse_network_name;

#[test]
fn test_netsh_output() {
    let output = "\r
There is 1 interface on the system:\r
\r
    Name                   : Wi-Fi\r
    Description            : Realtek RTL8822CE 802.11ac PCIe Adapter\r
    GUID                   : 2f6c0d4e-1b2a-4c3d-9e8f-0a1b2c3d4e5f\r
    Physical address       : 10:5b:ad:01:02:03\r
    State                  : connected\r
    BSSID                  : 9c:53:22:aa:bb:cc\r
    SSID                   : Office 5G\r
    Network type           : Infrastructure\r
    Radio type             : 802.11ac\r
";
    assert_eq!(
        parse_network_name(output, &windows::WIFI_LISTING_FORMAT).unwrap(),
        "Office 5G"
    );
}

#[test]
fn test_netsh_without_wlan_service() {
    let output = "The Wireless AutoConfig Service (wlansvc) is not running.\r\n";
    assert_eq!(
        parse_network_name(output, &windows::WIFI_LISTING_FORMAT).unwrap(),
        "Unknown Network"
    );
}

#[test]
fn test_iwgetid_output() {
    let output = "wlp2s0    ESSID:\"HomeNet\"\n";
    assert_eq!(
        parse_network_name(output, &linux::WIFI_LISTING_FORMAT).unwrap(),
        "HomeNet"
    );
}

#[test]
fn test_networksetup_output() {
    let output = "Current Wi-Fi Network: Coffee Shop\n";
    assert_eq!(
        parse_network_name(output, &macos::WIFI_LISTING_FORMAT).unwrap(),
        "Coffee Shop"
    );

    let disconnected = "You are not associated with an AirPort network.\n";
    assert_eq!(
        parse_network_name(disconnected, &macos::WIFI_LISTING_FORMAT).unwrap(),
        "Unknown Network"
    );
}

#[test]
fn test_iwgetid_without_association() {
    // iwgetid prints nothing and exits non-zero when not associated
    assert_eq!(
        parse_network_name("", &linux::WIFI_LISTING_FORMAT).unwrap(),
        "Unknown Network"
    );
}
