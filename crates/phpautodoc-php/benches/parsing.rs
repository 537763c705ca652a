//! Benchmarks for PHP lowering performance

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use phpautodoc_php::{PhpParser, SourceParser};
use std::path::Path;

fn bench_parse_functions(c: &mut Criterion) {
    let source = r#"<?php
/**
 * Says hello.
 */
function hello($name = "world") {
    return "Hello, " . $name . "!";
}

/** Adds two numbers */
function add($a, $b = 0) {
    return $a + $b;
}
"#;

    c.bench_function("lower_documented_functions", |b| {
        let parser = PhpParser::new();
        b.iter(|| {
            parser
                .parse_source(black_box(source), Path::new("test.php"))
                .unwrap()
        })
    });
}

fn bench_parse_class(c: &mut Criterion) {
    let source = r#"<?php
/**
 * A person.
 */
class Person {
    /** Display name */
    public $name, $nickname;
    private $age = 0;

    /**
     * Build a person.
     */
    public function __construct($name, $age = 0, $tags = array('new' => true)) {
        $this->name = $name;
        $this->age = $age;
    }

    public function getName() {
        return $this->name;
    }
}
"#;

    c.bench_function("lower_class_with_members", |b| {
        let parser = PhpParser::new();
        b.iter(|| {
            parser
                .parse_source(black_box(source), Path::new("test.php"))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_parse_functions, bench_parse_class);
criterion_main!(benches);
