fn main() {
    stocky_frontend::run();
}
