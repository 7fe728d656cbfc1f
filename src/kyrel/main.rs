use clap::Parser;
use directories::ProjectDirs;
use kyrel::api::{ConfigAction, KyrelApi, KyrelPaths, Roster};
use kyrel::config::KyrelConfig;
use kyrel::error::{KyrelError, Result};
use kyrel::model::Direction;
use kyrel::store::fs::FileStore;
use kyrel::store::LoadOrigin;
use std::fs;
use std::path::PathBuf;

mod args;
mod cli;
use args::{AdjustDirection, Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: KyrelApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Dashboard) | None => handle_dashboard(&ctx),
        Some(Commands::Inventory { location, category }) => {
            handle_inventory(&ctx, &location, &category)
        }
        Some(Commands::AddProduct {
            location,
            category,
            name,
            quantity,
            price,
        }) => handle_add_product(&mut ctx, &location, &category, &name, quantity, price),
        Some(Commands::Adjust {
            id,
            location,
            category,
            direction,
            quantity,
        }) => handle_adjust(&mut ctx, id, &location, &category, direction, quantity),
        Some(Commands::Sell {
            customer,
            badge,
            product,
            quantity,
        }) => handle_sell(&mut ctx, &customer, &badge, product, quantity),
        Some(Commands::Invoice { id }) => handle_invoice(&ctx, id),
        Some(Commands::Return {
            invoice,
            quantity,
            reason,
        }) => handle_return(&mut ctx, invoice, quantity, &reason),
        Some(Commands::Stock { term }) => handle_stock(&ctx, &term.join(" ")),
        Some(Commands::Employee { badge }) => handle_employee(&ctx, &badge),
        Some(Commands::Employees) => handle_employees(&ctx),
        Some(Commands::Staff) => handle_staff(&ctx),
        Some(Commands::SeedEmployees { file }) => handle_seed(&mut ctx, file),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let proj_dirs = ProjectDirs::from("com", "kyrel", "kyrel");

    let config_dir = match std::env::var_os("KYREL_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => proj_dirs
            .as_ref()
            .map(|d| d.config_dir().to_path_buf())
            .ok_or_else(|| KyrelError::Config("Could not determine config dir".into()))?,
    };
    let config = KyrelConfig::load(&config_dir)?;

    let data_file = match (&cli.data, std::env::var_os("KYREL_DATA")) {
        (Some(path), _) => path.clone(),
        (None, Some(path)) => PathBuf::from(path),
        (None, None) => {
            let data_dir = proj_dirs
                .as_ref()
                .map(|d| d.data_dir().to_path_buf())
                .unwrap_or_else(|| config_dir.clone());
            config.resolve_data_file(&config_dir, &data_dir)
        }
    };
    tracing::debug!(data_file = %data_file.display(), config_dir = %config_dir.display(), "resolved paths");

    let store = FileStore::new(data_file.clone());
    let paths = KyrelPaths {
        config_dir,
        data_file,
    };
    let api = KyrelApi::new(store, paths).with_recent_movements(config.recent_movements);
    Ok(AppContext { api })
}

fn handle_dashboard(ctx: &AppContext) -> Result<()> {
    if ctx.api.load_origin() == LoadOrigin::Fresh {
        cli::print_notice(&format!(
            "No data yet at {}; it will be created on the first change.",
            ctx.api.paths().data_file.display()
        ));
    }
    let result = ctx.api.dashboard()?;
    if let Some(dashboard) = &result.dashboard {
        cli::print_dashboard(dashboard);
    }
    cli::print_messages(&result.messages);
    Ok(())
}

fn handle_inventory(ctx: &AppContext, location: &str, category: &str) -> Result<()> {
    let result = ctx.api.inventory(location, category)?;
    if let Some(view) = &result.inventory {
        cli::print_inventory(view);
    }
    cli::print_messages(&result.messages);
    Ok(())
}

fn handle_add_product(
    ctx: &mut AppContext,
    location: &str,
    category: &str,
    name: &str,
    quantity: i64,
    price: f64,
) -> Result<()> {
    let result = ctx
        .api
        .add_product(location, category, name, quantity, price)?;
    cli::print_messages(&result.messages);
    Ok(())
}

fn handle_adjust(
    ctx: &mut AppContext,
    id: u64,
    location: &str,
    category: &str,
    direction: AdjustDirection,
    quantity: i64,
) -> Result<()> {
    let direction = match direction {
        AdjustDirection::Add => Direction::Increase,
        AdjustDirection::Remove => Direction::Decrease,
    };
    let result = ctx
        .api
        .adjust_stock(id, location, category, quantity, direction)?;
    cli::print_messages(&result.messages);
    Ok(())
}

fn handle_sell(
    ctx: &mut AppContext,
    customer: &str,
    badge: &str,
    product: u64,
    quantity: i64,
) -> Result<()> {
    let result = ctx.api.register_sale(customer, badge, product, quantity)?;
    cli::print_messages(&result.messages);
    if let Some(invoice) = &result.invoice {
        cli::print_invoice(invoice);
    }
    Ok(())
}

fn handle_invoice(ctx: &AppContext, id: u64) -> Result<()> {
    let result = ctx.api.find_invoice(id)?;
    if let Some(invoice) = &result.invoice {
        cli::print_invoice(invoice);
    }
    cli::print_messages(&result.messages);
    Ok(())
}

fn handle_return(ctx: &mut AppContext, invoice: u64, quantity: i64, reason: &str) -> Result<()> {
    let result = ctx.api.process_return(invoice, quantity, reason)?;
    cli::print_messages(&result.messages);
    Ok(())
}

fn handle_stock(ctx: &AppContext, term: &str) -> Result<()> {
    let result = ctx.api.query_stock(term)?;
    cli::print_stock(&result.stock);
    cli::print_messages(&result.messages);
    Ok(())
}

fn handle_employee(ctx: &AppContext, badge: &str) -> Result<()> {
    let result = ctx.api.employee_report(badge)?;
    if let Some(report) = &result.employee_report {
        cli::print_employee_report(report);
    }
    cli::print_messages(&result.messages);
    Ok(())
}

fn handle_employees(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_employees()?;
    cli::print_employees(&result.employees);
    cli::print_messages(&result.messages);
    Ok(())
}

fn handle_staff(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.staff_summary()?;
    if let Some(summary) = &result.staff {
        cli::print_staff(summary);
    }
    cli::print_messages(&result.messages);
    Ok(())
}

fn handle_seed(ctx: &mut AppContext, file: PathBuf) -> Result<()> {
    let content = fs::read_to_string(&file).map_err(KyrelError::Persistence)?;
    let roster: Roster = serde_json::from_str(&content)
        .map_err(|e| KyrelError::validation(format!("{}: {}", file.display(), e)))?;
    let result = ctx.api.seed_employees(roster)?;
    cli::print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        cli::print_config(config, ctx.api.paths());
    }
    cli::print_messages(&result.messages);
    Ok(())
}
