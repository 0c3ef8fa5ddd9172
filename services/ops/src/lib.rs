mod cli;
mod demo;
mod roster;

use response_coord::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
