fn main() -> anyhow::Result<()> {
    std::process::exit(pytron_example::exit_code::fixed_cli_main(1)?)
}
