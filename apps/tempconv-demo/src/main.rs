fn main() {
    tempconv_demo::entry_point();
}
