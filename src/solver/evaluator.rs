//! Memoized gate evaluation.

use std::collections::BTreeMap;

use log::trace;

use crate::circuit::{Circuit, NodeId, NodeKind};
use crate::error::{Result, WireError};

/// Evaluates a circuit, computing each gate at most once.
///
/// Evaluation is demand-driven: [`Evaluator::solve`] only computes the gates
/// its target depends on. Inputs are known from the start.
pub struct Evaluator<'c> {
    circuit: &'c Circuit,
    /// Memoized value per node, `None` until solved
    values: Vec<Option<bool>>,
    /// Number of gate computations performed so far
    gate_evaluations: usize,
}

impl<'c> Evaluator<'c> {
    /// Create an evaluator with every input known and no gate solved.
    pub fn new(circuit: &'c Circuit) -> Self {
        let values = circuit
            .iter()
            .map(|(_, node)| match node.kind {
                NodeKind::Input { value } => Some(value),
                NodeKind::Gate(_) => None,
            })
            .collect();

        Self {
            circuit,
            values,
            gate_evaluations: 0,
        }
    }

    /// The circuit being evaluated.
    pub fn circuit(&self) -> &'c Circuit {
        self.circuit
    }

    /// Solve a single node and everything it depends on.
    ///
    /// Uses an explicit stack rather than recursion, so deep carry chains
    /// cannot overflow the call stack.
    pub fn solve(&mut self, root: NodeId) -> Result<bool> {
        let mut stack = vec![root];

        while let Some(&id) = stack.last() {
            if self.values[id.0].is_some() {
                stack.pop();
                continue;
            }

            let kind = self.circuit.node(id).kind;
            match kind {
                NodeKind::Input { value } => {
                    self.values[id.0] = Some(value);
                    stack.pop();
                }
                NodeKind::Gate(gate) => {
                    let [a, b] = gate.inputs;
                    match (self.values[a.0], self.values[b.0]) {
                        (Some(va), Some(vb)) => {
                            let value = gate.op.apply(va, vb);
                            trace!("{} = {}", self.circuit.describe(id), u8::from(value));
                            self.values[id.0] = Some(value);
                            self.gate_evaluations += 1;
                            stack.pop();
                        }
                        (va, vb) => {
                            if va.is_none() {
                                stack.push(a);
                            }
                            if vb.is_none() && b != a {
                                stack.push(b);
                            }
                        }
                    }
                }
            }
        }

        self.value(root)
    }

    /// Solve every node in the circuit.
    pub fn solve_all(&mut self) -> Result<()> {
        for i in 0..self.values.len() {
            self.solve(NodeId(i))?;
        }
        Ok(())
    }

    /// Check if a node already has a value.
    pub fn is_solved(&self, id: NodeId) -> bool {
        self.values[id.0].is_some()
    }

    /// Value of an already-solved node.
    ///
    /// Reading a gate that has not been solved yet is an internal error.
    pub fn value(&self, id: NodeId) -> Result<bool> {
        self.values[id.0].ok_or_else(|| WireError::unsolved(self.circuit.node_name(id)))
    }

    /// Value of an already-solved node, looked up by name.
    pub fn value_of(&self, name: &str) -> Result<bool> {
        self.value(self.circuit.lookup(name)?)
    }

    /// Number of gate computations performed so far.
    pub fn gate_evaluations(&self) -> usize {
        self.gate_evaluations
    }

    /// Every node's value by name. Fails if any node is still unsolved.
    pub fn values(&self) -> Result<BTreeMap<String, bool>> {
        self.circuit
            .iter()
            .map(|(id, node)| Ok((node.name.clone(), self.value(id)?)))
            .collect()
    }

    /// Assemble the bus `prefix` into an integer, bit `i` taken from wire `{prefix}{i}`.
    ///
    /// The width is whatever the highest bus wire present dictates; gaps
    /// read as zero. Every bus wire must already be solved.
    pub fn assemble_output(&self, prefix: &str) -> Result<u64> {
        let mut output = 0u64;
        for (index, id) in self.circuit.bus(prefix)? {
            if index >= u64::BITS as usize {
                return Err(WireError::OutputTooWide {
                    name: self.circuit.node_name(id).to_string(),
                    index,
                });
            }
            if self.value(id)? {
                output |= 1 << index;
            }
        }
        Ok(output)
    }
}

/// Solve every node of `circuit` and return each wire's value by name.
pub fn evaluate(circuit: &Circuit) -> Result<BTreeMap<String, bool>> {
    let mut evaluator = Evaluator::new(circuit);
    evaluator.solve_all()?;
    evaluator.values()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::parse;
    use crate::testing::ripple_carry_adder;

    fn build(input: &str) -> Circuit {
        Circuit::from_ast(parse(input).unwrap()).unwrap()
    }

    #[test]
    fn test_two_xor_example() {
        // bit0 = 1^0 = 1, bit1 = 0^1 = 1, so 0b11.
        let circuit = build(
            "x00: 1\nx01: 0\ny00: 0\ny01: 1\n\n\
             x00 XOR y00 -> z00\nx01 XOR y01 -> z01\n",
        );
        let mut evaluator = Evaluator::new(&circuit);
        evaluator.solve_all().unwrap();
        assert_eq!(circuit.bus_width("z").unwrap(), 2);
        assert_eq!(evaluator.assemble_output("z").unwrap(), 3);
    }

    #[test]
    fn test_small_example() {
        // z00 = 1&0 = 0, z01 = 1^1 = 0, z02 = 1|0 = 1, so 0b100.
        let input = "x00: 1\nx01: 1\nx02: 1\ny00: 0\ny01: 1\ny02: 0\n\n\
                     x00 AND y00 -> z00\nx01 XOR y01 -> z01\nx02 OR y02 -> z02\n";
        let circuit = build(input);
        let mut evaluator = Evaluator::new(&circuit);
        evaluator.solve_all().unwrap();
        assert_eq!(evaluator.assemble_output("z").unwrap(), 4);
        assert_eq!(evaluator.assemble_output("x").unwrap(), 0b111);
    }

    #[test]
    fn test_forward_referenced_example() {
        let input = "x00: 1\nx01: 0\nx02: 1\nx03: 1\nx04: 0\n\
                     y00: 1\ny01: 1\ny02: 1\ny03: 1\ny04: 1\n\n\
                     ntg XOR fgs -> mjb\ny02 OR x01 -> tnw\nkwq OR kpj -> z05\n\
                     x00 OR x03 -> fst\ntgd XOR rvg -> z01\nvdt OR tnw -> bfw\n\
                     bfw AND frj -> z10\nffh OR nrd -> bqk\ny00 AND y03 -> djm\n\
                     y03 OR y00 -> psh\nbqk OR frj -> z08\ntnw OR fst -> frj\n\
                     gnj AND tgd -> z11\nbfw XOR mjb -> z00\nx03 OR x00 -> vdt\n\
                     gnj AND wpb -> z02\nx04 AND y00 -> kjc\ndjm OR pbm -> qhw\n\
                     nrd AND vdt -> hwm\nkjc AND fst -> rvg\ny04 OR y02 -> fgs\n\
                     y01 AND x02 -> pbm\nntg OR kjc -> kwq\npsh XOR fgs -> tgd\n\
                     qhw XOR tgd -> z09\npbm OR djm -> kpj\nx03 XOR y03 -> ffh\n\
                     x00 XOR y04 -> ntg\nbfw OR bqk -> z06\nnrd XOR fgs -> wpb\n\
                     frj XOR qhw -> z04\nbqk OR frj -> z07\ny03 OR x01 -> nrd\n\
                     hwm AND bqk -> z03\ntgd XOR rvg -> z12\ntnw OR pbm -> gnj\n";
        let circuit = build(input);
        let values = evaluate(&circuit).unwrap();
        assert!(values["mjb"]);
        assert!(!values["kjc"]);
        assert!(!values["z11"]);

        let mut evaluator = Evaluator::new(&circuit);
        evaluator.solve_all().unwrap();
        assert_eq!(evaluator.assemble_output("z").unwrap(), 2024);
    }

    #[test]
    fn test_each_gate_evaluated_once() {
        // c fans out to three gates; d and e both feed f.
        let input = "a: 1\nb: 0\n\n\
                     a XOR b -> c\nc AND a -> d\nc OR b -> e\nd XOR e -> f\nc OR f -> g\n";
        let circuit = build(input);
        let mut evaluator = Evaluator::new(&circuit);

        let g = circuit.lookup("g").unwrap();
        assert!(evaluator.solve(g).unwrap());
        assert_eq!(evaluator.gate_evaluations(), 5);

        evaluator.solve_all().unwrap();
        assert!(evaluator.solve(g).unwrap());
        assert_eq!(evaluator.gate_evaluations(), circuit.gate_count());
    }

    #[test]
    fn test_solve_is_demand_driven() {
        let circuit = build("a: 1\nb: 1\n\na AND b -> c\na XOR b -> d\n");
        let mut evaluator = Evaluator::new(&circuit);
        let c = circuit.lookup("c").unwrap();
        let d = circuit.lookup("d").unwrap();

        assert!(evaluator.solve(c).unwrap());
        assert!(!evaluator.is_solved(d));
        assert!(matches!(evaluator.value(d), Err(WireError::Unsolved { .. })));
        assert!(matches!(evaluator.values(), Err(WireError::Unsolved { .. })));
    }

    #[test]
    fn test_value_by_name() {
        let circuit = build("a: 1\nb: 0\n\na OR b -> c\na AND b -> d\n");
        let mut evaluator = Evaluator::new(&circuit);
        assert!(std::ptr::eq(evaluator.circuit(), &circuit));

        assert!(evaluator.value_of("a").unwrap());
        assert!(matches!(evaluator.value_of("c"), Err(WireError::Unsolved { .. })));

        evaluator.solve_all().unwrap();
        assert!(evaluator.value_of("c").unwrap());
        assert!(!evaluator.value_of("d").unwrap());
        assert!(matches!(
            evaluator.value_of("e"),
            Err(WireError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn test_unsolved_bus_bit_is_internal_error() {
        let circuit = build("x00: 1\n\nx00 AND x00 -> z00\n");
        let evaluator = Evaluator::new(&circuit);
        match evaluator.assemble_output("z") {
            Err(WireError::Unsolved { node }) => assert_eq!(node, "z00"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_wide_bus_is_rejected() {
        let circuit = build("z64: 1\n");
        let evaluator = Evaluator::new(&circuit);
        assert!(matches!(
            evaluator.assemble_output("z"),
            Err(WireError::OutputTooWide { index: 64, .. })
        ));
    }

    #[test]
    fn test_overflowing_bus_index_is_rejected() {
        let circuit = build("z00: 1\nz99999999999999999999: 1\n");
        let evaluator = Evaluator::new(&circuit);
        match evaluator.assemble_output("z") {
            Err(WireError::OutputTooWide { name, index }) => {
                assert_eq!(name, "z99999999999999999999");
                assert_eq!(index, usize::MAX);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_ambiguous_bus_bit_is_rejected() {
        let circuit = build("z1: 1\nz01: 1\n");
        let evaluator = Evaluator::new(&circuit);
        assert!(matches!(
            evaluator.assemble_output("z"),
            Err(WireError::DuplicateBusBit { index: 1, .. })
        ));
    }

    #[test]
    fn test_adder_sums_operands() {
        let cases = [
            (4, 11, 13),
            (8, 200, 99),
            (12, 0, 4095),
            (45, (1 << 44) + 12345, 987654321),
        ];
        for (bits, x, y) in cases {
            let circuit = build(&ripple_carry_adder(bits, x, y));
            let mut evaluator = Evaluator::new(&circuit);
            evaluator.solve_all().unwrap();
            assert_eq!(evaluator.assemble_output("x").unwrap(), x);
            assert_eq!(evaluator.assemble_output("y").unwrap(), y);
            assert_eq!(evaluator.assemble_output("z").unwrap(), x + y);
        }
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let circuit = build(&ripple_carry_adder(16, 40000, 30000));
        let first = evaluate(&circuit).unwrap();
        let second = evaluate(&circuit).unwrap();
        assert_eq!(first, second);
    }
}
