use std::time::Instant;

use rand::Rng;

use kselect::{floyd_rivest_in_place, quickselect_in_place};

const SIZES: [usize; 3] = [10_000, 100_000, 1_000_000];
const ROUNDS: u32 = 20;

fn main() {
    println!("Selecting the median of random arrays, {} rounds each", ROUNDS);

    let mut rng = rand::thread_rng();
    for size in SIZES {
        let data: Vec<i64> = (0..size).map(|_| rng.gen()).collect();
        let k = size / 2;

        let mut scratch = data.clone();
        let start = Instant::now();
        for _ in 0..ROUNDS {
            scratch.copy_from_slice(&data);
            quickselect_in_place(&mut scratch, k).unwrap();
        }
        let quickselect_time = start.elapsed();

        let start = Instant::now();
        for _ in 0..ROUNDS {
            scratch.copy_from_slice(&data);
            floyd_rivest_in_place(&mut scratch, k).unwrap();
        }
        let floyd_rivest_time = start.elapsed();

        let start = Instant::now();
        for _ in 0..ROUNDS {
            scratch.copy_from_slice(&data);
            scratch.sort_unstable();
        }
        let sort_time = start.elapsed();

        println!("n = {}", size);
        println!("  quickselect:  {:>12.3?}", quickselect_time / ROUNDS);
        println!("  floyd-rivest: {:>12.3?}", floyd_rivest_time / ROUNDS);
        println!("  full sort:    {:>12.3?}", sort_time / ROUNDS);
        println!(
            "  speedup vs sort: {:.2}x (quickselect), {:.2}x (floyd-rivest)",
            sort_time.as_secs_f64() / quickselect_time.as_secs_f64(),
            sort_time.as_secs_f64() / floyd_rivest_time.as_secs_f64()
        );
    }
}
