fn main() {
    hazard_field::game::run();
}
