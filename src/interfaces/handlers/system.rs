use std::time::Duration;

use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;
use humantime::format_duration;
use serde::{Deserialize, Serialize};
use sysinfo::System;

use crate::constants::START_TIME;

#[derive(Debug, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub kernel: String,
    pub hostname: String,
    pub cpu_count: usize,
    pub memory_total: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub uptime: String,
    pub timestamp: String,
    pub started_at: String,
    pub version: String,
    pub system: SystemInfo,
}

fn build_health_response() -> HealthCheckResponse {
    let now_utc = Utc::now();
    let uptime_secs = now_utc
        .signed_duration_since(*START_TIME)
        .num_seconds()
        .max(0) as u64;

    let mut sys = System::new();
    sys.refresh_memory();

    let system = SystemInfo {
        os: System::name().unwrap_or_else(|| "Unknown".to_string()),
        kernel: System::kernel_version().unwrap_or_else(|| "Unknown".to_string()),
        hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        cpu_count: num_cpus::get(),
        memory_total: format!("{:.2} GB", sys.total_memory() as f64 / 1024.0 / 1024.0 / 1024.0),
    };

    HealthCheckResponse {
        status: "healthy".to_string(),
        uptime: format_duration(Duration::from_secs(uptime_secs)).to_string(),
        timestamp: now_utc.to_rfc3339(),
        started_at: START_TIME.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        system,
    }
}

#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(build_health_response())
}
