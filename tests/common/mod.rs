//! Shared G-code fixtures for the integration tests.

#![allow(dead_code)]

/// A small SuperSlicer plate with one cube.
pub fn superslicer_fixture() -> &'static str {
    "; generated by SuperSlicer 2.4.58 on 2023-01-01\n\
     ; object: {\"name\":\"cube\",\"id\":\"cube id:0 copy 0\",\
     \"object_center\":[150.5,155.5,0.0],\
     \"boundingbox_center\":[150.5,155.5,2.5],\
     \"boundingbox_size\":[5.0,5.0,5.0]}\n\
     ; plater:\n\
     G28\n\
     ; printing object cube id:0 copy 0\n\
     G1 X150 Y155 E0.5\n\
     ; stop printing object cube id:0 copy 0\n\
     M107\n"
}

/// A PrusaSlicer file with two objects and some geometry.
pub fn prusaslicer_fixture() -> &'static str {
    "; generated by PrusaSlicer 2.5.0+linux-x64\n\
     ;\n\
     G28\n\
     ; printing object cube.stl id:0 copy 0\n\
     G1 X10 Y10 E0.1\n\
     G1 X20 Y10 E0.2\n\
     G1 X20 Y20 E0.3\n\
     G1 X10 Y20 E0.4\n\
     ; stop printing object cube.stl id:0 copy 0\n\
     ; printing object cube.stl id:0 copy 1\n\
     G1 X40 Y40 E0.5\n\
     G1 X50 Y50 E0.6\n\
     ; stop printing object cube.stl id:0 copy 1\n\
     M107\n"
}

/// A Cura file with two meshes across two layers.
pub fn cura_fixture() -> &'static str {
    ";Generated with Cura_SteamEngine 5.2.1\n\
     ;LAYER_COUNT:2\n\
     G28\n\
     ;LAYER:0\n\
     ;MESH:cube.stl\n\
     G1 X10 Y10 E0.1\n\
     G1 X20 Y20 E0.2\n\
     ;MESH:NONMESH\n\
     G0 X0 Y0\n\
     ;MESH:sphere.stl\n\
     G1 X40 Y40 E0.3\n\
     ;TIME_ELAPSED:10.0\n\
     ;LAYER:1\n\
     ;MESH:cube.stl\n\
     G1 X15 Y15 E0.4\n\
     ;TIME_ELAPSED:20.0\n\
     M107\n"
}

/// An ideaMaker file with two parts and a skirt sentinel.
pub fn ideamaker_fixture() -> &'static str {
    ";Sliced by ideaMaker 4.2.3\n\
     ;TOTAL_NUM: 2\n\
     G28\n\
     ;PRINTING: part_a.3mf\n\
     ;PRINTING_ID: 0\n\
     G1 X10 Y10 E0.1\n\
     G1 X20 Y20 E0.2\n\
     ;PRINTING: part_b.3mf\n\
     ;PRINTING_ID: 1\n\
     G1 X40 Y40 E0.3\n\
     ;PRINTING: skirt\n\
     ;PRINTING_ID: -1\n\
     G0 X0 Y0\n\
     ;REMAINING_TIME: 0\n\
     M107\n"
}

/// A file with no recognizable slicer banner.
pub fn unknown_slicer_fixture() -> &'static str {
    "; sliced by a mystery tool\n\
     G28\n\
     G1 X0 Y0 E1\n"
}
