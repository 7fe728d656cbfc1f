use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

mod print;

pub(crate) use print::{
    print_config, print_dashboard, print_employee_report, print_employees, print_inventory,
    print_invoice, print_messages, print_notice, print_staff, print_stock,
};

/// Logs go to stderr so they never mix with command output.
///
/// `RUST_LOG` wins when set; otherwise warnings only, or debug with `--verbose`.
pub(crate) fn init_logging(verbose: bool) {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
