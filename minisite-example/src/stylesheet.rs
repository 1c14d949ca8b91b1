pub fn styles() -> String {
    r#"<style>
body {
    font-family: sans-serif;
    margin: 0;
}

.header {
    display: flex;
    align-items: baseline;
    gap: 2em;
    padding: 0 1em;
    border-bottom: 1px solid #ccc;
}

.header__links a {
    margin-right: 1em;
}

.body {
    padding: 1em;
}
</style>"#
        .to_string()
}
