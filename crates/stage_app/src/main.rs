mod host;

fn main() {
    host::run_app();
}
