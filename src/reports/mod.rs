mod tables;

pub use self::tables::{
    level as level_table, load_times as print_load_times, near_misses as print_near_misses,
    records as print_records, stretch as print_stretch,
};

use runstats::navigator::Navigator;
use runstats::roster::Roster;

pub fn print_level(name: &str, nav: &Navigator<'_>, roster: &Roster) {
    println!("\n{}", level_table(name, nav, roster));
}
