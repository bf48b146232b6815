fn main() -> anyhow::Result<()> {
    turtle2py::run()
}
