fn main() {
    if let Err(err) = pmmc_drv::main_inner(std::env::args()) {
        eprintln!("error: {err:#}");
        // spec.md §6: driver failures exit `-1`, which the OS truncates to
        // 255 — the same observable status the original C `return -1;`
        // produces.
        std::process::exit(-1);
    }
}
