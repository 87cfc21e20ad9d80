//! Circuit description generators shared by unit tests.

use std::fmt::Write;

use crate::circuit::bus_wire;

/// Describe a `bits`-wide ripple-carry adder with `x` and `y` as its inputs.
///
/// Bit 0 is a half adder; every other bit is a full adder whose carry is
/// the OR of two ANDs. The final carry drives `z{bits}`. Gate lines are
/// emitted last-bit-first so most operands are forward references.
pub fn ripple_carry_adder(bits: usize, x: u64, y: u64) -> String {
    assert!(bits >= 2, "an adder needs at least two bits");

    let mut text = String::new();
    for (prefix, value) in [("x", x), ("y", y)] {
        for i in 0..bits {
            writeln!(text, "{}: {}", bus_wire(prefix, i), (value >> i) & 1).unwrap();
        }
    }
    text.push('\n');

    let carry = |i: usize| {
        if i + 1 == bits {
            bus_wire("z", bits)
        } else {
            format!("cry{:02}", i)
        }
    };

    let mut gates = vec![
        "x00 XOR y00 -> z00".to_string(),
        format!("y00 AND x00 -> {}", carry(0)),
    ];
    for i in 1..bits {
        let (xi, yi, zi) = (bus_wire("x", i), bus_wire("y", i), bus_wire("z", i));
        let prev = carry(i - 1);
        gates.push(format!("{xi} XOR {yi} -> hsm{i:02}"));
        gates.push(format!("{yi} AND {xi} -> hcy{i:02}"));
        gates.push(format!("{prev} XOR hsm{i:02} -> {zi}"));
        gates.push(format!("hsm{i:02} AND {prev} -> pcy{i:02}"));
        gates.push(format!("pcy{i:02} OR hcy{i:02} -> {}", carry(i)));
    }

    for gate in gates.iter().rev() {
        writeln!(text, "{gate}").unwrap();
    }
    text
}

/// Exchange the output wires of the gates driving `a` and `b`.
pub fn swap_outputs(text: &str, a: &str, b: &str) -> String {
    let mut swapped = 0;
    let lines: Vec<String> = text
        .lines()
        .map(|line| match line.split_once(" -> ") {
            Some((lhs, out)) if out == a => {
                swapped += 1;
                format!("{lhs} -> {b}")
            }
            Some((lhs, out)) if out == b => {
                swapped += 1;
                format!("{lhs} -> {a}")
            }
            _ => line.to_string(),
        })
        .collect();
    assert_eq!(swapped, 2, "both {a} and {b} must be gate outputs");
    lines.join("\n") + "\n"
}
