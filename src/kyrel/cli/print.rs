use colored::Colorize;
use kyrel::api::{
    CmdMessage, Dashboard, EmployeeReport, InventoryView, Invoice, KyrelPaths, MessageLevel,
    StaffSummary, StockByName,
};
use kyrel::config::KyrelConfig;
use kyrel::model::{Employee, MovementKind};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 32;
const RULE: &str = "────────────────────────────────────────────────────────────";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_notice(text: &str) {
    println!("{}", text.dimmed());
}

pub(crate) fn print_dashboard(dash: &Dashboard) {
    println!("{} {}", "Dashboard".bold(), dash.date.to_string().dimmed());
    println!("{}", RULE.dimmed());
    println!("  Units in stock   {:>10}", dash.total_units);
    println!("  Product models   {:>10}", dash.product_models);
    println!("  Invoices         {:>10}", dash.invoices);
    println!(
        "  Sales today      {:>10}",
        format_money(dash.sales_today).green()
    );

    println!();
    for (location, units) in &dash.units_by_location {
        println!("  {:<16} {:>10}", location.to_string(), units);
    }
    for (category, units) in &dash.units_by_category {
        println!("  {:<16} {:>10}", category.to_string(), units);
    }

    println!();
    println!("{}", "Recent movements".bold());
    if dash.recent_movements.is_empty() {
        println!("  {}", "No movements yet.".dimmed());
        return;
    }
    for line in &dash.recent_movements {
        let m = &line.movement;
        let name = line
            .product_name
            .clone()
            .unwrap_or_else(|| format!("#{} (removed)", m.product_id));
        let kind = m.kind.to_string();
        let kind = match m.kind {
            MovementKind::Entry | MovementKind::Return => kind.green(),
            MovementKind::Exit | MovementKind::Sale => kind.yellow(),
        };
        println!(
            "  {}  {:<7} {} {:>6}  {}",
            m.date.to_string().dimmed(),
            kind,
            pad_to_width(&name, NAME_WIDTH),
            m.quantity,
            m.location
        );
    }
}

pub(crate) fn print_inventory(view: &InventoryView) {
    println!(
        "{} {} / {}",
        "Inventory".bold(),
        view.location,
        view.category
    );
    if view.products.is_empty() {
        println!("No products found.");
        return;
    }
    println!(
        "{}",
        format!(
            "{:>5}  {}  {:>6}  {:>10}",
            "ID",
            pad_to_width("Name", NAME_WIDTH),
            "Qty",
            "Price"
        )
        .dimmed()
    );
    for product in &view.products {
        let qty = product.quantity.to_string();
        let qty = if product.quantity == 0 {
            qty.red()
        } else {
            qty.normal()
        };
        println!(
            "{:>5}  {}  {:>6}  {:>10}",
            product.id.to_string().yellow(),
            pad_to_width(&product.name, NAME_WIDTH),
            qty,
            format_money(product.unit_price)
        );
    }
    println!("{} units", view.total_units().to_string().bold());
}

pub(crate) fn print_stock(groups: &[StockByName]) {
    for group in groups {
        println!(
            "{}  {}",
            pad_to_width(&group.name, NAME_WIDTH).bold(),
            group.total()
        );
        for (location, quantity) in &group.locations {
            println!("    {:<10} {:>6}", location.to_string(), quantity);
        }
    }
}

pub(crate) fn print_invoice(invoice: &Invoice) {
    let sale = &invoice.sale;
    println!("{} {}", "Invoice".bold(), sale.id.to_string().yellow());
    println!("{}", RULE.dimmed());
    println!("  Date       {}", sale.date);
    println!("  Customer   {}", sale.customer);
    match &invoice.product {
        Some(product) => println!("  Product    #{} {}", product.id, product.name),
        None => println!("  Product    #{} {}", sale.product_id, "(removed)".dimmed()),
    }
    println!("  Quantity   {}", sale.quantity);
    if sale.returned > 0 {
        println!("  Returned   {}", sale.returned.to_string().yellow());
    }
    match &invoice.employee {
        Some(employee) => println!("  Seller     {} {}", employee.badge, employee.name),
        None => println!("  Seller     {}", sale.employee_badge),
    }
    println!("  Total      {}", format_money(sale.total).green().bold());
}

pub(crate) fn print_employees(employees: &[Employee]) {
    if employees.is_empty() {
        println!("No employees found.");
        return;
    }
    for employee in employees {
        print_employee_line(employee);
    }
}

fn print_employee_line(employee: &Employee) {
    println!(
        "{:<8} {}  {:<8} {:>7.1}h  {:>4} sales",
        employee.badge.yellow(),
        pad_to_width(&employee.name, NAME_WIDTH),
        employee.location.to_string(),
        employee.hours_worked,
        employee.sales_count
    );
}

pub(crate) fn print_employee_report(report: &EmployeeReport) {
    print_employee_line(&report.employee);
    println!(
        "  {} invoices, {} sold",
        report.invoices,
        format_money(report.sales_total).green()
    );
}

pub(crate) fn print_staff(summary: &StaffSummary) {
    println!("{}", "Staff".bold());
    println!("{}", RULE.dimmed());
    println!("  Employees   {:>6}", summary.employees);
    println!("  Leaves      {:>6}", summary.leaves);
    println!("  Absences    {:>6}", summary.absences);
    if summary.attendance_rate.is_empty() {
        return;
    }
    println!();
    println!("{}", "Attendance".bold());
    for (location, rate) in &summary.attendance_rate {
        let shown = format!("{:>5.1}%", rate);
        let shown = if *rate < 80.0 {
            shown.yellow()
        } else {
            shown.green()
        };
        println!("  {:<10} {}", location.to_string(), shown);
    }
}

pub(crate) fn print_config(config: &KyrelConfig, paths: &KyrelPaths) {
    let data_file = config
        .data_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(default)".to_string());
    println!("data-file = {}", data_file);
    println!("recent-movements = {}", config.recent_movements);
    println!(
        "{}",
        format!("using {}", paths.data_file.display()).dimmed()
    );
}

fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Pads or truncates so the visible width is exactly `width`.
fn pad_to_width(s: &str, width: usize) -> String {
    let mut shown = truncate_to_width(s, width);
    let padding = width.saturating_sub(shown.width());
    shown.push_str(&" ".repeat(padding));
    shown
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
