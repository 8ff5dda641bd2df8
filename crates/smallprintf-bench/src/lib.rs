//! Shared workloads for the smallprintf benchmarks.

use smallprintf_core::Arg;

/// A representative firmware log line and its arguments.
pub struct Workload {
    pub name: &'static str,
    pub format: &'static [u8],
    pub args: &'static [Arg<'static, u16>],
}

pub const WORKLOADS: &[Workload] = &[
    Workload {
        name: "literal",
        format: b"system ready\r\n",
        args: &[],
    },
    Workload {
        name: "adc_line",
        format: b"ADC #%u: %d mV (0x%x)\r\n",
        args: &[Arg::Unsigned(3), Arg::Signed(-120), Arg::Unsigned(0x0FA0)],
    },
    Workload {
        name: "lcd_row",
        format: b"%-8s%5u rpm",
        args: &[Arg::Str(Some(b"FAN1")), Arg::Unsigned(1450)],
    },
    Workload {
        name: "register_dump",
        format: b"%2x %2x %2x %2x %4x %4x",
        args: &[
            Arg::Unsigned(0x12),
            Arg::Unsigned(0x34),
            Arg::Unsigned(0x56),
            Arg::Unsigned(0x78),
            Arg::Unsigned(0xBEEF),
            Arg::Unsigned(0xCAFE),
        ],
    },
];
