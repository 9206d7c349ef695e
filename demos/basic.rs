//! Basic example of using the tour builder

use knights_tour_core::{build_tour, verify_path, SimpleRng, Square, TourBuilder, TourConfig};

fn main() {
    // Build an open tour from the corner with a fixed seed
    println!("Building a tour on an 8x8 board from (0, 0)...\n");
    let mut rng = SimpleRng::with_seed(2024);
    match build_tour(Square::new(0, 0), 8, 10, &mut rng) {
        Ok(tour) => {
            println!("Found on attempt {}", tour.attempt);
            println!("Closed: {}", tour.closed);
            for row in tour.step_grid().iter().rev() {
                let line: Vec<String> = row.iter().map(|step| format!("{:>3}", step)).collect();
                println!("{}", line.join(""));
            }
            println!("Valid: {}", verify_path(tour.size, &tour.path).is_ok());
        }
        Err(e) => println!("{}", e),
    }

    // Insist on a closed tour
    println!("\n--- Closed tours only ---\n");
    let mut builder = TourBuilder::with_config(TourConfig::closed(6));
    match builder.build(Square::new(2, 3)) {
        Ok(tour) => println!("Closed 6x6 tour found on attempt {}", tour.attempt),
        Err(e) => println!("{}", e),
    }

    // Boards without a tour exhaust the budget
    println!("\n--- 3x3 board ---\n");
    if let Err(e) = build_tour(Square::new(0, 0), 3, 5, &mut rng) {
        println!("{}", e);
    }
}
