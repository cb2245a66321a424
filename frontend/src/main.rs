fn main() {
    fleetify_frontend::start();
}
