#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Fixture puzzles in the canonical string encoding, one per supported
//! board size plus a set of harder 9×9 instances. Used by the tests and
//! the benchmarks.

/// A 4×4 puzzle.
pub const EXAMPLE_FOUR: &str = "1.3434.22.41412.";

/// The classic 9×9 puzzle with a unique solution
/// ([`EXAMPLE_NINE_SOLUTION`]).
pub const EXAMPLE_NINE: &str = "53..7....\
                                6..195...\
                                .98....6.\
                                8...6...3\
                                4..8.3..1\
                                7...2...6\
                                .6....28.\
                                ...419..5\
                                ....8..79";

/// The unique solution of [`EXAMPLE_NINE`].
pub const EXAMPLE_NINE_SOLUTION: &str = "534678912\
                                         672195348\
                                         198342567\
                                         859761423\
                                         426853791\
                                         713924856\
                                         961537284\
                                         287419635\
                                         345286179";

/// A 16×16 puzzle using letters `A`–`G` for the values 10–16.
pub const EXAMPLE_SIXTEEN: &str = "..7..29.3..A....\
                                   ..E..A.G..2FB.9.\
                                   A....C..........\
                                   .8D.6......B1.E2\
                                   B.5...168E.7F..3\
                                   ..8G7.C2.3B.....\
                                   ....8.......D.2E\
                                   .ACD....46..7.5.\
                                   .B.F..81....G5C.\
                                   19.7.......E....\
                                   .....F7.2G.CE9..\
                                   G..CE.4361...2.B\
                                   85.ED......4.F6.\
                                   ..........3....9\
                                   .G.A36..9.C..D..\
                                   ....4..A.F8..E..";

/// A 25×25 puzzle using letters `A`–`P` for the values 10–25.
pub const EXAMPLE_TWENTY_FIVE: &str = ".234567.9ABCDE.GHIJKL.NOP\
                                       678.ABCDEF.HIJKLM.OP1234.\
                                       BCDEFG.IJKLMN.P12345.789A\
                                       GH.JKLMNO.123456.89ABCD.F\
                                       LMNOP.234567.9ABCDE.GHIJK\
                                       2.456789.BCDEFG.IJKLMN.P1\
                                       789A.CDEFGH.JKLMNO.123456\
                                       .DEFGHI.KLMNOP.234567.9AB\
                                       HIJ.LMNOP1.345678.ABCDEF.\
                                       MNOP12.456789.BCDEFG.IJKL\
                                       34.6789AB.DEFGHI.KLMNOP.2\
                                       89ABC.EFGHIJ.LMNOP1.34567\
                                       D.FGHIJK.MNOP12.456789.BC\
                                       IJKL.NOP123.56789A.CDEFGH\
                                       .OP1234.6789AB.DEFGHI.KLM\
                                       456.89ABCD.FGHIJK.MNOP12.\
                                       9ABCDE.GHIJKL.NOP123.5678\
                                       EF.HIJKLM.OP1234.6789AB.D\
                                       JKLMN.P12345.789ABC.EFGHI\
                                       O.123456.89ABCD.FGHIJK.MN\
                                       5678.ABCDEF.HIJKLM.OP1234\
                                       .BCDEFG.IJKLMN.P12345.789\
                                       FGH.JKLMNO.123456.89ABCD.\
                                       KLMNOP.234567.9ABCDE.GHIJ\
                                       P1.345678.ABCDEF.HIJKLM.O";

/// Harder 9×9 instances, each with far fewer clues than [`EXAMPLE_NINE`].
pub const HARD_NINE: [&str; 5] = [
    "..7.9.6.3..3..4...1.6..5..........5....7.9.......5..2.8.1..........8.3...243..7..",
    "38..............6.1....93....62...9.832...1.......6....1..7.2.39.31...8.5..6.2..9",
    ".86..1..41....67.22..45.81..15......32...........17.5.....4....5.7.63.8..32......",
    ".4.6.....7..2.5....964.75..6715..2..........75..8..6..95.....8..6...24.........7.",
    ".4.3...69..5....81.9126...5.5.1.23....9..3.1....65...........4..6.5.......84.....",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::board::Size;
    use crate::solver::parse;

    #[test]
    fn test_fixture_lengths() {
        assert_eq!(EXAMPLE_FOUR.len(), Size::Four.cell_count());
        assert_eq!(EXAMPLE_NINE.len(), Size::Nine.cell_count());
        assert_eq!(EXAMPLE_NINE_SOLUTION.len(), Size::Nine.cell_count());
        assert_eq!(EXAMPLE_SIXTEEN.len(), Size::Sixteen.cell_count());
        assert_eq!(EXAMPLE_TWENTY_FIVE.len(), Size::TwentyFive.cell_count());
        for puzzle in HARD_NINE {
            assert_eq!(puzzle.len(), Size::Nine.cell_count());
        }
    }

    #[test]
    fn test_fixtures_parse() {
        for puzzle in [
            EXAMPLE_FOUR,
            EXAMPLE_NINE,
            EXAMPLE_NINE_SOLUTION,
            EXAMPLE_SIXTEEN,
            EXAMPLE_TWENTY_FIVE,
        ] {
            assert!(parse::parse(puzzle).is_ok());
        }
        for puzzle in HARD_NINE {
            assert!(parse::parse(puzzle).is_ok());
        }
    }
}
