fn main() -> anyhow::Result<()> {
    let code = pytron_example::exit_code::cli_main()?;
    std::process::exit(code)
}
