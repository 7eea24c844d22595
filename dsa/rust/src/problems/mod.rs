//! Array, string and number exercises.

mod counter;
mod find_max;
mod intersection;
mod is_prime;
mod most_frequent_char;
mod pair_product;
mod pair_sum;
mod three_sum;
mod valid_anagram;

pub use counter::Counter;
pub use find_max::find_max;
pub use intersection::intersection;
pub use is_prime::{is_prime, PrimeError};
pub use most_frequent_char::most_frequent_char;
pub use pair_product::{pair_product, pair_product_brute_force};
pub use pair_sum::{pair_sum, pair_sum_brute_force};
pub use three_sum::three_sum;
pub use valid_anagram::is_anagram;
