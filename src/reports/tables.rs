use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use runstats::analysis::near_miss::NearMiss;
use runstats::analysis::stretch::StretchEntry;
use runstats::analysis::timing::{DailyLoad, TimeUnit};
use runstats::navigator::Navigator;
use runstats::palette;
use runstats::record::Record;
use runstats::roster::Roster;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

/// Current level of `nav`: weight, share of this level, share of the overall
/// total and display colour per tag, "Other" last.
pub fn level(name: &str, nav: &Navigator<'_>, roster: &Roster) -> Table {
    let mut table = new_table();
    let base = roster.color_of(name);

    table.add_row(vec![
        Cell::new(format!(
            "{} (Level {}/{}) - {} @ {:.1}%",
            name,
            nav.current_index() + 1,
            nav.depth(),
            nav.mode(),
            nav.cutoff_ratio() * 100.0
        ))
        .add_attribute(Attribute::Bold),
        Cell::new("Weight").fg(Color::Cyan),
        Cell::new("% Level"),
        Cell::new("% Overall"),
        Cell::new("Color"),
    ]);
    align_right(&mut table, 1..=3);

    for slice in nav.slices() {
        let label_cell = if slice.is_other {
            let hint = if nav.can_drill() { "Other ▸" } else { "Other" };
            Cell::new(hint).fg(Color::DarkGrey)
        } else {
            Cell::new(&slice.label).add_attribute(Attribute::Bold)
        };
        let color = if slice.is_other {
            String::new()
        } else {
            palette::tag_color(&slice.label, &roster.tag_colors, base)
        };

        table.add_row(vec![
            label_cell,
            Cell::new(slice.weight).fg(Color::Cyan),
            Cell::new(format!("{:.1}%", slice.level_share * 100.0)),
            Cell::new(format!("{:.1}%", slice.overall_share * 100.0)),
            Cell::new(color),
        ]);
    }

    table
}

pub fn stretch(name: &str, minutes: i64, entries: &[StretchEntry<'_>]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(format!(
            "Best {}-min stretch ({}): {} ATs",
            minutes,
            name,
            entries.len()
        ))
        .add_attribute(Attribute::Bold),
        Cell::new("Offset (min)"),
        Cell::new("Time Spent (min)"),
    ]);
    align_right(&mut table, 1..=2);

    for e in entries {
        table.add_row(vec![
            Cell::new(&e.record.map_title),
            Cell::new(format!("{:.1}", e.offset_minutes)),
            Cell::new(format!("{:.2}", e.record.time_spent as f64 / 60_000.0)),
        ]);
    }
    println!("\n{}", table);
}

pub fn near_misses(name: &str, hits: &[NearMiss<'_>]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(format!("Near misses: {}", name)).add_attribute(Attribute::Bold),
        Cell::new("Day"),
        Cell::new("PB Diff (ms)").fg(Color::Red),
    ]);
    align_right(&mut table, 2..=2);

    for m in hits {
        table.add_row(vec![
            Cell::new(&m.record.map_title),
            Cell::new(m.record.datetime.date_naive()),
            Cell::new(m.pb_diff).fg(Color::Red),
        ]);
    }
    println!("\n{}", table);
}

pub fn records(title: &str, records: &[&Record]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(title).add_attribute(Attribute::Bold),
        Cell::new("Player"),
        Cell::new("Medal"),
        Cell::new("Final (ms)"),
    ]);
    align_right(&mut table, 3..=3);

    for r in records {
        table.add_row(vec![
            Cell::new(&r.map_title),
            Cell::new(&r.player),
            Cell::new(r.medal),
            Cell::new(r.final_time),
        ]);
    }
    println!("\n{}", table);
}

pub fn load_times(days: &[DailyLoad], unit: TimeUnit) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Day").add_attribute(Attribute::Bold),
        Cell::new(format!("Avg Load ({})", unit)),
        Cell::new("Samples"),
    ]);
    align_right(&mut table, 1..=2);

    for d in days {
        table.add_row(vec![
            Cell::new(d.day),
            Cell::new(format!("{:.2}", d.average)),
            Cell::new(d.samples),
        ]);
    }
    println!("\n{}", table);
}
