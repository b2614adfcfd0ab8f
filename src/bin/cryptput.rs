//! CryptPut - save the current acme window (or stdin) encrypted.

use acme_crypt::cli::{self, put, PutCli};

fn main() {
    let args: PutCli = cli::parse();
    cli::init_logging(args.verbose);

    if let Err(e) = put::execute(args) {
        cli::fail(e);
    }
}
