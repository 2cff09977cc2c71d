//! Text and JSON rendering of command results.

use serde::Serialize;

use rigorient_orient::prelude::*;

pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("error: failed to serialize output: {e}"),
    }
}

fn fmt_vec(v: &Vec3) -> String {
    format!("({:>8.4}, {:>8.4}, {:>8.4})", v.x, v.y, v.z)
}

fn fmt_angles([x, y, z]: [f64; 3]) -> String {
    format!("({x:>9.4}, {y:>9.4}, {z:>9.4})")
}

pub fn print_orientation(result: &OrientationResult) {
    println!(
        "primary {}  secondary {}",
        result.primary_axis, result.secondary_axis
    );
    println!("plane normal {}", fmt_vec(&result.plane_normal));
    println!("up reference {}", fmt_vec(&result.up_reference));
    println!();

    let orients = result.joint_orients();
    for (i, orient) in orients.iter().enumerate() {
        println!("joint {}", i + 1);
        println!("  forward {}", fmt_vec(&result.forward(i)));
        println!("  up      {}", fmt_vec(&result.up(i)));
        if let Some(side) = result.side(i) {
            println!("  side    {}", fmt_vec(&side));
        }
        println!("  orient  {}", fmt_angles(*orient));
    }
}

pub fn print_twist(plan: &TwistPlan) {
    println!(
        "end helper at {} aims {}, rotation {}",
        fmt_vec(&plan.end_helper.position.coords),
        plan.aim_axis,
        fmt_angles(plan.end_helper.euler_xyz_degrees())
    );
    for joint in &plan.joints {
        println!(
            "twist {:>2}  weights {:>4}/{:<4}  at {}  rotation {}",
            joint.index,
            joint.start_weight,
            joint.end_weight,
            fmt_vec(&joint.pose.position.coords),
            fmt_angles(joint.pose.euler_xyz_degrees())
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectors_format_with_fixed_width() {
        assert_eq!(
            fmt_vec(&Vec3::new(0.0, 1.0, -0.5)),
            "(  0.0000,   1.0000,  -0.5000)"
        );
    }

    #[test]
    fn angles_format_with_fixed_width() {
        assert_eq!(fmt_angles([180.0, 0.0, 90.0]), "( 180.0000,    0.0000,   90.0000)");
    }
}
