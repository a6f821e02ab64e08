//! System information display

use sysinfo::System;

const RULE: &str = "============================================================";

/// Format the system information block shown at startup.
pub fn system_info_block(version: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", RULE));
    out.push_str("SYSTEM INFORMATION\n");
    out.push_str(&format!("{}\n", RULE));
    out.push_str(&format!("Primer Version: {}\n", version));
    out.push_str(&format!(
        "System: {} {}\n",
        System::name().unwrap_or_else(|| std::env::consts::OS.to_string()),
        System::os_version().unwrap_or_default()
    ));
    out.push_str(&format!(
        "Kernel: {}\n",
        System::kernel_version().unwrap_or_else(|| "unknown".to_string())
    ));
    out.push_str(&format!(
        "Host: {}\n",
        System::host_name().unwrap_or_else(|| "unknown".to_string())
    ));
    out.push_str(&format!("Architecture: {}\n", std::env::consts::ARCH));
    out.push_str(&format!(
        "CPUs: {}\n",
        std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
    ));
    out.push_str(RULE);
    out
}
