//! Reference grids with known evolutions.

use infest_core::{Generation, StateKey};

/// Reference initial layout.
pub const REFERENCE_INITIAL: &str = "\
....#
#..#.
#..##
..#..
#....
";

/// [`REFERENCE_INITIAL`] after one generation.
pub const REFERENCE_GENERATION_1: &str = "\
#..#.
####.
###.#
##.##
.##..
";

/// Key of [`REFERENCE_GENERATION_1`].
pub const REFERENCE_GENERATION_1_KEY: StateKey = StateKey(7_200_233);

/// [`REFERENCE_INITIAL`] after two generations.
pub const REFERENCE_GENERATION_2: &str = "\
#####
....#
....#
...#.
#.###
";

/// First layout of the reference run that appears twice.
pub const REFERENCE_RECURRING: &str = "\
.....
.....
.....
#....
.#...
";

/// Key (biodiversity rating) of [`REFERENCE_RECURRING`].
pub const REFERENCE_RECURRING_KEY: StateKey = StateKey(2_129_920);

/// Generation at which the reference run detects the repeat.
pub const REFERENCE_CYCLE_GENERATION: Generation = Generation(86);

/// Generation at which [`REFERENCE_RECURRING`] was first recorded.
pub const REFERENCE_FIRST_SEEN: Generation = Generation(74);

/// Largest population reached during the reference run.
pub const REFERENCE_PEAK_POPULATION: u32 = 19;

/// A lone bug in the centre of a 5×5 grid.
///
/// It spreads for a few generations, dies out completely at generation 5,
/// and the empty grid repeats at generation 6.
pub const SINGLE_BUG: &str = "\
.....
.....
..#..
.....
.....
";

/// Generation at which the [`SINGLE_BUG`] run detects the repeat.
pub const SINGLE_BUG_CYCLE_GENERATION: Generation = Generation(6);

/// Generation at which the [`SINGLE_BUG`] run first reaches the empty grid.
pub const SINGLE_BUG_FIRST_SEEN: Generation = Generation(5);
