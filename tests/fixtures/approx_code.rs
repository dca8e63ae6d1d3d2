// Test fixture with literals and conditions cargo-approx should flag.

// RULE: approx-constant
fn circle_area(radius: f64) -> f64 {
    3.14159 * radius * radius
}

fn growth_factor() -> f64 {
    2.718281828
}

fn unit_diagonal() -> f32 {
    1.41421f32
}

// RULE: constant-condition
fn leftover_debug_branch() {
    if true {
        println!("always runs");
    }
}

fn disabled_block(flag: bool) {
    if flag {
        println!("maybe");
    } else if false {
        println!("never");
    }
}

// Clean code (should NOT trigger)
fn plain_numbers() -> f64 {
    let half = 0.5;
    let price = 2.5;
    let count = 3;
    half * price * count as f64
}

fn real_condition(enabled: bool) {
    if enabled {
        println!("fine");
    }
}

fn uses_std_constants() -> f64 {
    std::f64::consts::PI * std::f64::consts::SQRT_2
}

// Suppressed occurrences (should NOT trigger)
fn suppressed_by_comment() -> f64 {
    // cargo-approx-ignore: approx-constant
    3.14159
}

#[allow(cargo_approx::constant_condition)]
fn suppressed_by_attribute() {
    if true {
        println!("intentional");
    }
}

fn main() {
    println!("Test fixture for cargo-approx");
}
