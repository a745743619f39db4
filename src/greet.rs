use pytron_example::greeter::{Variant, cli_main};

fn main() -> anyhow::Result<()> {
    cli_main(Variant::Raising)
}
