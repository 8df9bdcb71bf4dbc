//! Report collection and rendering

use anyhow::{Context, Result};
use cpux::{CpuInfoHandle, MemoryInfoHandle};
use cpux_core::{CpuSnapshot, MemorySnapshot};
use serde::Serialize;

use crate::config::{OutputConfig, OutputFormat};

const UNKNOWN: &str = "unknown";

/// Which descriptors to query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Cpu,
    Memory,
    All,
}

impl Section {
    fn wants_cpu(self) -> bool {
        matches!(self, Section::Cpu | Section::All)
    }

    fn wants_memory(self) -> bool {
        matches!(self, Section::Memory | Section::All)
    }
}

/// Host information gathered through the C interface
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<CpuSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemorySnapshot>,
}

impl Report {
    /// Query the requested descriptors, releasing each before returning
    pub fn collect(section: Section) -> Result<Self> {
        let cpu = if section.wants_cpu() {
            let handle = CpuInfoHandle::query().context("failed to allocate CPU descriptor")?;
            let snapshot = handle.to_snapshot();
            if snapshot.is_degraded() {
                tracing::info!("some CPU fields could not be determined on this host");
            }
            Some(snapshot)
        } else {
            None
        };

        let memory = if section.wants_memory() {
            let handle =
                MemoryInfoHandle::query().context("failed to allocate memory descriptor")?;
            Some(handle.to_snapshot())
        } else {
            None
        };

        Ok(Self { cpu, memory })
    }

    pub fn render(&self, output: &OutputConfig) -> Result<String> {
        match output.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(self.render_text(output.human_readable)),
        }
    }

    fn render_text(&self, human_readable: bool) -> String {
        let mut lines = Vec::new();

        if let Some(cpu) = &self.cpu {
            let model = if cpu.model.is_empty() {
                UNKNOWN
            } else {
                cpu.model.as_str()
            };
            lines.push(format!("{:<17}{}", "CPU model:", model));
            lines.push(format!("{:<17}{}", "Physical cores:", count(cpu.core_count)));
            lines.push(format!("{:<17}{}", "Logical threads:", count(cpu.thread_count)));
        }

        if let Some(memory) = &self.memory {
            let total = match memory.total_memory {
                0 => UNKNOWN.to_string(),
                bytes if human_readable => {
                    format!("{:.2} GiB ({} bytes)", memory.total_gib(), bytes)
                }
                bytes => format!("{} bytes", bytes),
            };
            lines.push(format!("{:<17}{}", "Total memory:", total));
        }

        lines.join("\n")
    }
}

fn count(value: u32) -> String {
    match value {
        0 => UNKNOWN.to_string(),
        n => n.to_string(),
    }
}
