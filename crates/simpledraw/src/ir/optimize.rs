//! Adjacent-duplicate elimination.

use log::debug;

use super::{Instruction, IntermediateCode};

impl IntermediateCode {
    /// Removes every instruction equal to its predecessor in the
    /// unoptimized sequence and returns how many were removed.
    ///
    /// Only adjacent duplicates are removed; `A B A` is left alone.
    /// Running the pass twice removes nothing the second time.
    pub fn optimize(&mut self) -> usize {
        let original = &self.instructions;
        let kept: Vec<Instruction> = original
            .iter()
            .enumerate()
            .filter(|&(index, instruction)| index == 0 || original[index - 1] != *instruction)
            .map(|(_, instruction)| *instruction)
            .collect();

        let removed = original.len() - kept.len();
        self.instructions = kept;
        debug!(removed, remaining = self.instructions.len(); "Optimized intermediate code");
        removed
    }
}

#[cfg(test)]
mod tests {
    use simpledraw_core::Number;

    use super::*;
    use crate::ir::Opcode;

    fn line(x1: i64) -> Instruction {
        Instruction::new(
            Opcode::Line,
            Some(Number::Int(x1)),
            Some(Number::Int(20)),
            Some(Number::Int(30)),
            Some(Number::Int(40)),
        )
    }

    fn pen(width: i64) -> Instruction {
        Instruction::new(Opcode::Pen, Some(Number::Int(width)), None, None, None)
    }

    #[test]
    fn test_adjacent_duplicates_removed() {
        let mut code = IntermediateCode::from(vec![line(10), line(10)]);
        assert_eq!(code.optimize(), 1);
        assert_eq!(code.instructions(), &[line(10)]);
    }

    #[test]
    fn test_runs_collapse_to_one() {
        let mut code = IntermediateCode::from(vec![pen(1), pen(1), pen(1), line(10), pen(1)]);
        assert_eq!(code.optimize(), 2);
        assert_eq!(code.instructions(), &[pen(1), line(10), pen(1)]);
    }

    #[test]
    fn test_non_adjacent_duplicates_kept() {
        let mut code = IntermediateCode::from(vec![line(10), line(11), line(10)]);
        assert_eq!(code.optimize(), 0);
        assert_eq!(code.len(), 3);
    }

    #[test]
    fn test_numeric_equality_counts_as_duplicate() {
        let float_line = Instruction::new(
            Opcode::Line,
            Some(Number::Float(10.0)),
            Some(Number::Int(20)),
            Some(Number::Int(30)),
            Some(Number::Int(40)),
        );
        let mut code = IntermediateCode::from(vec![line(10), float_line]);
        assert_eq!(code.optimize(), 1);
    }

    #[test]
    fn test_large_int_and_nearby_float_are_distinct() {
        let program = simpledraw_parser::parse_source(
            "Line 9007199254740992.0 0 0 0\nLine 9007199254740993 0 0 0\nLine 9007199254740992 0 0 0\n",
        )
        .unwrap();
        let mut code = IntermediateCode::generate(&program);

        assert_eq!(code.optimize(), 0);
        assert_eq!(code.len(), 3);
        assert_eq!(code.optimize(), 0);

        // An exactly equal float still counts as a duplicate
        let program =
            simpledraw_parser::parse_source("Line 9007199254740992.0 0 0 0\nLine 9007199254740992 0 0 0\n")
                .unwrap();
        assert_eq!(IntermediateCode::generate(&program).optimize(), 1);
    }

    #[test]
    fn test_second_pass_removes_nothing() {
        let mut code = IntermediateCode::from(vec![line(1), line(1), line(2), line(2), line(2)]);
        assert_eq!(code.optimize(), 3);
        assert_eq!(code.optimize(), 0);
    }

    #[test]
    fn test_empty_code() {
        let mut code = IntermediateCode::new();
        assert_eq!(code.optimize(), 0);
        assert!(code.is_empty());
    }
}
