#![no_main]

use libfuzzer_sys::fuzz_target;

use fixgraph::{
    algo::Components,
    infra::{
        modeling::MutOpsSeq,
        testing::{check_consistency, check_equivalent},
    },
    storage::{AdjMap, AdjMatrix},
};

fuzz_target!(|seq: MutOpsSeq| {
    let (map, map_results) = seq.build::<AdjMap>().unwrap();
    let (matrix, matrix_results) = seq.build::<AdjMatrix>().unwrap();

    for (i, (map_result, matrix_result)) in map_results.iter().zip(&matrix_results).enumerate() {
        assert_eq!(
            map_result, matrix_result,
            "results of {:?} differ",
            seq.ops[i]
        );
    }

    let results = [
        (check_consistency(&map).map_err(|error| error.to_string()), "AdjMap"),
        (check_consistency(&matrix).map_err(|error| error.to_string()), "AdjMatrix"),
        (
            check_equivalent(&map, &matrix).map_err(|error| error.to_string()),
            "AdjMap <-> AdjMatrix",
        ),
    ];

    if results.iter().any(|(result, _)| result.is_err()) {
        let mut report = "storages are inconsistent:".to_string();

        for (result, label) in results {
            let result = match result {
                Ok(_) => "OK".to_string(),
                Err(error) => error,
            };
            report.push_str(format!("\n  {label}: {result}").as_str());
        }

        panic!("{report}");
    }

    assert_eq!(
        Components::on(&map).run().sizes(),
        Components::on(&matrix).run().sizes()
    );
});
