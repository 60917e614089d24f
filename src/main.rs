fn main() {
    #[cfg(feature = "csr")]
    course_portal::start();
}
