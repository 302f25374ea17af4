fn main() {
    side_shooter::game::run();
}
