//! CryptGet - open an encrypted file in a new acme window.

use acme_crypt::cli::{self, get, GetCli};

fn main() {
    let args: GetCli = cli::parse();
    cli::init_logging(args.verbose);

    if let Err(e) = get::execute(args) {
        cli::fail(e);
    }
}
