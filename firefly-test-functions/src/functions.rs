//! One module per benchmark formula.

mod ackley;
mod alpine;
mod colville;
mod csendes;
mod dixon_price;
mod easom;
mod griewank;
mod michalewicz;
mod powell;
mod quartic;
mod rastrigin;
mod rosenbrock;
mod schaffer;
mod schwefel;
mod schwefel_1_2;
mod schwefel_2_20;
mod schwefel_2_21;
mod schwefel_2_22;
mod schwefel_2_4;
mod shekel;
mod sphere;
mod step2;
mod sum_squares;

pub use ackley::ackley;
pub use alpine::alpine;
pub use colville::colville;
pub use csendes::csendes;
pub use dixon_price::dixon_price;
pub use easom::easom;
pub use griewank::griewank;
pub use michalewicz::michalewicz;
pub use powell::powell;
pub use quartic::{quartic, quartic_noiseless};
pub use rastrigin::rastrigin;
pub use rosenbrock::rosenbrock;
pub use schaffer::schaffer;
pub use schwefel::schwefel;
pub use schwefel_1_2::schwefel_1_2;
pub use schwefel_2_20::schwefel_2_20;
pub use schwefel_2_21::schwefel_2_21;
pub use schwefel_2_22::schwefel_2_22;
pub use schwefel_2_4::schwefel_2_4;
pub use shekel::shekel;
pub use sphere::sphere;
pub use step2::step2;
pub use sum_squares::sum_squares;
