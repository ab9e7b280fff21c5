//! Output formatting module

use carkit_app::{Config, Walkthrough};
use carkit_domain::VehicleSummary;
use carkit_types::{OutputFormat, Result};
use serde::Serialize;

/// A summary together with its catalog position
#[derive(Debug, Serialize)]
pub struct Indexed<'a, T> {
    pub index: usize,
    #[serde(flatten)]
    pub item: &'a T,
}

fn capabilities_label(summary: &VehicleSummary) -> String {
    if summary.capabilities.is_empty() {
        "-".to_string()
    } else {
        summary
            .capabilities
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}~", truncated)
    }
}

pub fn render_summary_table(rows: &[(usize, VehicleSummary)]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>3}  {:<40} {:<10} {:<10} {:>6} {:>7}  {}\n",
        "#", "Variant", "Brand", "Model", "Wheels", "Engine", "Capabilities"
    ));
    out.push_str(&"-".repeat(100));
    out.push('\n');
    for (index, summary) in rows {
        out.push_str(&format!(
            "{:>3}  {:<40} {:<10} {:<10} {:>6} {:>6.2}L  {}\n",
            index,
            summary.kind.label(),
            truncate_str(&summary.brand, 10),
            truncate_str(&summary.model, 10),
            summary.number_of_wheels,
            summary.engine_capacity,
            capabilities_label(summary),
        ));
    }
    out
}

pub fn render_summary_detail(index: usize, summary: &VehicleSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("\nVehicle #{}\n", index));
    out.push_str("==========\n");
    out.push_str(&format!("Variant:         {}\n", summary.kind.label()));
    out.push_str(&format!("Brand:           {}\n", summary.brand));
    out.push_str(&format!("Model:           {}\n", summary.model));
    out.push_str(&format!("Color:           {}\n", summary.color));
    out.push_str(&format!("Body type:       {}\n", summary.body_type));
    out.push_str(&format!("Wheels:          {}\n", summary.number_of_wheels));
    out.push_str(&format!("Fuel:            {}\n", summary.fuel_type));
    out.push_str(&format!("Transmission:    {}\n", summary.transmission_type));
    out.push_str(&format!("Engine capacity: {:.2} L\n", summary.engine_capacity));
    out.push_str(&format!("Capabilities:    {}\n", capabilities_label(summary)));
    out
}

pub fn render_walkthrough(index: usize, walk: &Walkthrough) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "#{} {} {} ({})\n",
        index,
        walk.summary.brand,
        walk.summary.model,
        walk.summary.kind.label()
    ));
    for op in &walk.operations {
        out.push_str(&format!("  - {}\n", op));
    }
    out.push_str(&format!(
        "  attributes {}\n",
        if walk.unchanged { "unchanged" } else { "CHANGED" }
    ));
    out
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn output_summaries(format: OutputFormat, rows: &[(usize, VehicleSummary)]) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let indexed: Vec<_> = rows
                .iter()
                .map(|(index, item)| Indexed { index: *index, item })
                .collect();
            print_json(&indexed)
        }
        OutputFormat::Table => {
            print!("{}", render_summary_table(rows));
            Ok(())
        }
    }
}

pub fn output_summary(format: OutputFormat, index: usize, summary: &VehicleSummary) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&Indexed { index, item: summary }),
        OutputFormat::Table => {
            print!("{}", render_summary_detail(index, summary));
            Ok(())
        }
    }
}

pub fn output_walkthroughs(format: OutputFormat, walks: &[(usize, Walkthrough)]) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let indexed: Vec<_> = walks
                .iter()
                .map(|(index, item)| Indexed { index: *index, item })
                .collect();
            print_json(&indexed)
        }
        OutputFormat::Table => {
            for (index, walk) in walks {
                print!("{}", render_walkthrough(*index, walk));
            }
            Ok(())
        }
    }
}

pub fn output_config(format: OutputFormat, config: &Config) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(config),
        OutputFormat::Table => {
            println!("Output format: {}", config.output_format);
            println!(
                "Catalog:       {}",
                config
                    .catalog_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(built-in showcase)".to_string())
            );
            println!("Log filter:    {}", config.log_filter);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carkit_app::{walk_through, AnyVehicle};
    use carkit_domain::{Car, VariantKind};
    use pretty_assertions::assert_eq;

    fn summary(kind: VariantKind) -> VehicleSummary {
        AnyVehicle::build(
            kind,
            Car::new("Piaggio", "Ape", "blue", "pickup", 4, "petrol", "manual", 0.2),
        )
        .summary()
    }

    #[test]
    fn test_table_shows_overridden_wheels() {
        let table = render_summary_table(&[(0, summary(VariantKind::ThreeWheeler))]);
        let row = table.lines().nth(2).unwrap();
        assert!(row.contains("three-wheeler"));
        assert!(row.contains(" 3 "));
        assert!(row.trim_end().ends_with('-'));
    }

    #[test]
    fn test_detail_lists_capabilities() {
        let detail = render_summary_detail(4, &summary(VariantKind::CargoTransportAndFogLights));
        assert!(detail.contains("Vehicle #4"));
        assert!(detail.contains("Capabilities:    cargo transport, fog lights"));
    }

    #[test]
    fn test_walkthrough_render() {
        let mut vehicle = AnyVehicle::build(
            VariantKind::StreetCleaner,
            Car::new("Isuzu", "Elf", "orange", "truck", 4, "diesel", "manual", 3.0),
        );
        let text = render_walkthrough(1, &walk_through(&mut vehicle));
        assert!(text.starts_with("#1 Isuzu Elf"));
        assert!(text.contains("  - sweep_street\n"));
        assert!(text.ends_with("  attributes unchanged\n"));
    }

    #[test]
    fn test_indexed_json_is_flat() {
        let s = summary(VariantKind::FogLights);
        let json = serde_json::to_value(Indexed { index: 2, item: &s }).unwrap();
        assert_eq!(json["index"], 2);
        assert_eq!(json["kind"], "fog_lights");
        assert_eq!(json["capabilities"][0], "fog_lights");
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Volvo", 10), "Volvo");
        assert_eq!(truncate_str("Mercedes-Benz", 10), "Mercedes-~");
    }
}
