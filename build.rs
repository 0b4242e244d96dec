fn main() {
    // Emit ESP-IDF link metadata only for hardware builds; host builds
    // (tests, fuzzing) have no ESP-IDF environment to probe.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
