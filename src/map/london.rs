use super::*;
use crate::Location;

const TAXI: Modes = Modes::TAXI;
const BUS: Modes = Modes::BUS;
const TUBE: Modes = Modes::UNDERGROUND;
const BOAT: Modes = Modes::BLACK;
const TAXI_BUS: Modes = Modes::TAXI.union(Modes::BUS);
const BUS_TUBE: Modes = Modes::BUS.union(Modes::UNDERGROUND);

/// Adjacency table of the standard London board.
///
/// Row `n` lists the routes leaving location `n`; row 0 is unused so that
/// locations index directly. Boat routes can only be taken with a black ticket.
pub const LONDON: [&[(Location, Modes)]; 200] = [
    &[],
    &[(8, TAXI), (9, TAXI), (58, BUS), (46, BUS_TUBE)],
    &[(20, TAXI), (10, TAXI)],
    &[(11, TAXI), (12, TAXI), (4, TAXI), (22, BUS), (23, BUS)],
    &[(3, TAXI), (13, TAXI)],
    &[(15, TAXI), (16, TAXI)],
    &[(29, TAXI), (7, TAXI)],
    &[(6, TAXI), (17, TAXI), (42, BUS)],
    &[(1, TAXI), (19, TAXI), (18, TAXI)],
    &[(1, TAXI), (19, TAXI), (20, TAXI)],
    &[(2, TAXI), (11, TAXI), (34, TAXI), (21, TAXI)],
    &[(3, TAXI), (10, TAXI), (22, TAXI)],
    &[(3, TAXI), (23, TAXI)],
    &[(4, TAXI), (14, TAXI_BUS), (24, TAXI), (23, TAXI_BUS), (52, BUS), (89, TUBE), (67, TUBE), (46, TUBE)],
    &[(13, TAXI_BUS), (15, TAXI_BUS), (25, TAXI)],
    &[(5, TAXI), (16, TAXI), (28, TAXI), (26, TAXI), (14, TAXI_BUS), (29, BUS), (41, BUS)],
    &[(5, TAXI), (29, TAXI), (28, TAXI), (15, TAXI)],
    &[(7, TAXI), (30, TAXI), (29, TAXI)],
    &[(8, TAXI), (31, TAXI), (43, TAXI)],
    &[(8, TAXI), (9, TAXI), (32, TAXI)],
    &[(2, TAXI), (9, TAXI), (33, TAXI)],
    &[(10, TAXI), (33, TAXI)],
    &[(11, TAXI), (23, TAXI_BUS), (35, TAXI), (34, TAXI_BUS), (3, BUS), (65, BUS)],
    &[(12, TAXI), (13, TAXI_BUS), (37, TAXI), (22, TAXI_BUS), (3, BUS), (67, BUS)],
    &[(13, TAXI), (38, TAXI), (37, TAXI)],
    &[(14, TAXI), (39, TAXI), (38, TAXI)],
    &[(15, TAXI), (27, TAXI), (39, TAXI)],
    &[(26, TAXI), (28, TAXI), (40, TAXI)],
    &[(15, TAXI), (16, TAXI), (41, TAXI), (27, TAXI)],
    &[(6, TAXI), (17, TAXI), (42, TAXI_BUS), (41, TAXI_BUS), (16, TAXI), (55, BUS), (15, BUS)],
    &[(17, TAXI), (42, TAXI)],
    &[(18, TAXI), (44, TAXI), (43, TAXI)],
    &[(19, TAXI), (33, TAXI), (45, TAXI), (44, TAXI)],
    &[(20, TAXI), (21, TAXI), (46, TAXI), (32, TAXI)],
    &[(10, TAXI), (22, TAXI_BUS), (48, TAXI), (47, TAXI), (63, BUS), (46, BUS)],
    &[(22, TAXI), (36, TAXI), (65, TAXI), (48, TAXI)],
    &[(37, TAXI), (49, TAXI), (35, TAXI)],
    &[(23, TAXI), (24, TAXI), (50, TAXI), (36, TAXI)],
    &[(24, TAXI), (25, TAXI), (51, TAXI), (50, TAXI)],
    &[(26, TAXI), (52, TAXI), (51, TAXI), (25, TAXI)],
    &[(27, TAXI), (41, TAXI), (53, TAXI), (52, TAXI)],
    &[(28, TAXI), (29, TAXI_BUS), (54, TAXI), (40, TAXI), (15, BUS), (87, BUS), (52, BUS)],
    &[(30, TAXI), (56, TAXI), (72, TAXI_BUS), (29, TAXI_BUS), (7, BUS)],
    &[(18, TAXI), (31, TAXI), (57, TAXI)],
    &[(32, TAXI), (58, TAXI), (31, TAXI)],
    &[(32, TAXI), (46, TAXI), (60, TAXI), (59, TAXI), (58, TAXI)],
    &[(33, TAXI), (47, TAXI), (61, TAXI), (45, TAXI), (34, BUS), (78, BUS), (58, BUS), (1, BUS_TUBE), (13, TUBE), (79, TUBE), (74, TUBE)],
    &[(34, TAXI), (62, TAXI), (46, TAXI)],
    &[(34, TAXI), (35, TAXI), (63, TAXI), (62, TAXI)],
    &[(36, TAXI), (50, TAXI), (66, TAXI)],
    &[(37, TAXI), (38, TAXI), (49, TAXI)],
    &[(38, TAXI), (39, TAXI), (52, TAXI), (68, TAXI), (67, TAXI)],
    &[(39, TAXI), (40, TAXI), (69, TAXI), (51, TAXI), (13, BUS), (41, BUS), (86, BUS), (67, BUS)],
    &[(40, TAXI), (54, TAXI), (69, TAXI)],
    &[(41, TAXI), (55, TAXI), (70, TAXI), (53, TAXI)],
    &[(71, TAXI), (54, TAXI), (29, BUS), (89, BUS)],
    &[(42, TAXI), (91, TAXI)],
    &[(43, TAXI), (58, TAXI), (73, TAXI)],
    &[(45, TAXI), (59, TAXI), (75, TAXI), (74, TAXI_BUS), (57, TAXI), (44, TAXI), (46, BUS), (77, BUS), (1, BUS)],
    &[(45, TAXI), (76, TAXI), (75, TAXI), (58, TAXI)],
    &[(45, TAXI), (61, TAXI), (76, TAXI)],
    &[(46, TAXI), (62, TAXI), (78, TAXI), (76, TAXI), (60, TAXI)],
    &[(47, TAXI), (48, TAXI), (79, TAXI), (61, TAXI)],
    &[(48, TAXI), (64, TAXI), (80, TAXI), (79, TAXI_BUS), (34, BUS), (65, BUS), (100, BUS)],
    &[(65, TAXI), (81, TAXI), (63, TAXI)],
    &[(35, TAXI), (66, TAXI), (82, TAXI_BUS), (64, TAXI), (22, BUS), (67, BUS), (63, BUS)],
    &[(49, TAXI), (67, TAXI), (82, TAXI), (65, TAXI)],
    &[(51, TAXI), (68, TAXI), (84, TAXI), (66, TAXI), (23, BUS), (52, BUS), (102, BUS), (82, BUS), (65, BUS), (13, TUBE), (89, TUBE), (111, TUBE), (79, TUBE)],
    &[(51, TAXI), (69, TAXI), (85, TAXI), (67, TAXI)],
    &[(52, TAXI), (53, TAXI), (86, TAXI), (68, TAXI)],
    &[(54, TAXI), (71, TAXI), (87, TAXI)],
    &[(55, TAXI), (72, TAXI), (89, TAXI), (70, TAXI)],
    &[(42, TAXI_BUS), (91, TAXI), (90, TAXI), (71, TAXI), (107, BUS), (105, BUS)],
    &[(57, TAXI), (74, TAXI), (92, TAXI)],
    &[(58, TAXI_BUS), (75, TAXI), (92, TAXI), (73, TAXI), (94, BUS), (46, TUBE)],
    &[(58, TAXI), (59, TAXI), (94, TAXI), (74, TAXI)],
    &[(59, TAXI), (60, TAXI), (61, TAXI), (77, TAXI)],
    &[(78, TAXI_BUS), (96, TAXI), (95, TAXI), (76, TAXI), (124, BUS), (94, BUS), (58, BUS)],
    &[(61, TAXI), (79, TAXI_BUS), (97, TAXI), (77, TAXI_BUS), (46, BUS)],
    &[(62, TAXI), (63, TAXI_BUS), (98, TAXI), (78, TAXI_BUS), (46, TUBE), (67, TUBE), (111, TUBE), (93, TUBE)],
    &[(63, TAXI), (100, TAXI), (99, TAXI)],
    &[(64, TAXI), (82, TAXI), (100, TAXI)],
    &[(65, TAXI_BUS), (66, TAXI), (67, BUS), (101, TAXI), (140, BUS), (81, TAXI), (100, BUS)],
    &[(102, TAXI), (101, TAXI)],
    &[(67, TAXI), (85, TAXI)],
    &[(68, TAXI), (103, TAXI), (84, TAXI)],
    &[(69, TAXI), (52, BUS), (87, BUS), (104, TAXI), (116, BUS), (103, TAXI), (102, BUS)],
    &[(70, TAXI), (41, BUS), (88, TAXI), (105, BUS), (86, BUS)],
    &[(89, TAXI), (117, TAXI), (87, TAXI)],
    &[(71, TAXI), (55, BUS), (13, TUBE), (105, TAXI_BUS), (128, TUBE), (88, TAXI), (140, TUBE), (67, TUBE)],
    &[(72, TAXI), (91, TAXI), (105, TAXI)],
    &[(56, TAXI), (107, TAXI), (105, TAXI), (90, TAXI), (72, TAXI)],
    &[(73, TAXI), (74, TAXI), (93, TAXI)],
    &[(92, TAXI), (94, TAXI_BUS), (79, TUBE)],
    &[(74, BUS), (75, TAXI), (95, TAXI), (77, BUS), (93, TAXI_BUS)],
    &[(77, TAXI), (122, TAXI), (94, TAXI)],
    &[(77, TAXI), (97, TAXI), (109, TAXI)],
    &[(78, TAXI), (98, TAXI), (109, TAXI), (96, TAXI)],
    &[(79, TAXI), (99, TAXI), (110, TAXI), (97, TAXI)],
    &[(80, TAXI), (112, TAXI), (110, TAXI), (98, TAXI)],
    &[(81, TAXI), (82, BUS), (101, TAXI), (113, TAXI), (112, TAXI), (111, BUS), (80, TAXI), (63, BUS)],
    &[(83, TAXI), (114, TAXI), (100, TAXI), (82, TAXI)],
    &[(67, BUS), (103, TAXI), (86, BUS), (115, TAXI), (127, BUS), (83, TAXI)],
    &[(85, TAXI), (86, TAXI), (102, TAXI)],
    &[(86, TAXI), (116, TAXI)],
    &[(90, TAXI), (72, BUS), (91, TAXI), (106, TAXI), (107, BUS), (108, TAXI_BUS), (87, BUS), (89, TAXI_BUS)],
    &[(107, TAXI), (105, TAXI)],
    &[(91, TAXI), (72, BUS), (119, TAXI), (161, BUS), (106, TAXI), (105, BUS)],
    &[(105, TAXI_BUS), (119, TAXI), (135, BUS), (117, TAXI), (116, BUS), (115, BOAT)],
    &[(97, TAXI), (110, TAXI), (124, TAXI), (96, TAXI)],
    &[(99, TAXI), (111, TAXI), (109, TAXI), (98, TAXI)],
    &[(112, TAXI), (100, BUS), (67, TUBE), (153, TUBE), (124, TAXI_BUS), (163, TUBE), (110, TAXI), (79, TUBE)],
    &[(100, TAXI), (125, TAXI), (111, TAXI), (99, TAXI)],
    &[(114, TAXI), (125, TAXI), (100, TAXI)],
    &[(101, TAXI), (115, TAXI), (126, TAXI), (132, TAXI), (131, TAXI), (113, TAXI)],
    &[(102, TAXI), (127, TAXI), (126, TAXI), (114, TAXI), (108, BOAT), (157, BOAT)],
    &[(104, TAXI), (86, BUS), (117, TAXI), (108, BUS), (118, TAXI), (142, BUS), (127, TAXI_BUS)],
    &[(88, TAXI), (108, TAXI), (129, TAXI), (116, TAXI)],
    &[(116, TAXI), (129, TAXI), (142, TAXI), (134, TAXI)],
    &[(107, TAXI), (136, TAXI), (108, TAXI)],
    &[(121, TAXI), (144, TAXI)],
    &[(122, TAXI), (145, TAXI), (120, TAXI)],
    &[(95, TAXI), (123, TAXI_BUS), (146, TAXI), (121, TAXI), (144, BUS)],
    &[(124, TAXI_BUS), (149, TAXI), (165, BUS), (148, TAXI), (137, TAXI), (144, BUS), (122, TAXI_BUS)],
    &[(109, TAXI), (111, TAXI_BUS), (130, TAXI), (138, TAXI), (153, BUS), (123, TAXI_BUS), (77, BUS)],
    &[(113, TAXI), (131, TAXI), (112, TAXI)],
    &[(115, TAXI), (127, TAXI), (140, TAXI), (114, TAXI)],
    &[(116, TAXI_BUS), (134, TAXI), (133, TAXI_BUS), (126, TAXI), (115, TAXI), (102, BUS)],
    &[(143, TAXI), (135, BUS), (89, TUBE), (160, TAXI), (161, BUS), (188, TAXI), (199, BUS), (172, TAXI), (187, BUS), (185, TUBE), (142, TAXI_BUS), (140, TUBE)],
    &[(117, TAXI), (135, TAXI), (143, TAXI), (142, TAXI), (118, TAXI)],
    &[(131, TAXI), (139, TAXI), (124, TAXI)],
    &[(114, TAXI), (130, TAXI), (125, TAXI)],
    &[(114, TAXI), (140, TAXI)],
    &[(127, TAXI_BUS), (141, TAXI), (157, BUS), (140, TAXI_BUS)],
    &[(118, TAXI), (142, TAXI), (141, TAXI), (127, TAXI)],
    &[(108, BUS), (136, TAXI), (161, TAXI_BUS), (143, TAXI), (128, BUS), (129, TAXI)],
    &[(119, TAXI), (162, TAXI), (135, TAXI)],
    &[(123, TAXI), (147, TAXI)],
    &[(152, TAXI), (150, TAXI), (124, TAXI)],
    &[(130, TAXI), (140, TAXI), (154, TAXI), (153, TAXI)],
    &[(132, TAXI), (82, BUS), (126, TAXI), (89, TUBE), (133, TAXI_BUS), (128, TUBE), (156, TAXI_BUS), (154, TAXI_BUS), (153, TUBE), (139, TAXI)],
    &[(134, TAXI), (142, TAXI), (158, TAXI), (133, TAXI)],
    &[(118, TAXI), (116, BUS), (129, TAXI), (143, TAXI), (128, TAXI_BUS), (158, TAXI), (157, BUS), (141, TAXI), (134, TAXI)],
    &[(135, TAXI), (160, TAXI), (128, TAXI), (142, TAXI), (129, TAXI)],
    &[(120, TAXI), (122, BUS), (145, TAXI), (123, BUS), (163, BUS), (177, TAXI)],
    &[(121, TAXI), (146, TAXI), (144, TAXI)],
    &[(122, TAXI), (147, TAXI), (163, TAXI), (145, TAXI)],
    &[(137, TAXI), (164, TAXI), (146, TAXI)],
    &[(123, TAXI), (149, TAXI), (164, TAXI)],
    &[(123, TAXI), (150, TAXI), (165, TAXI), (148, TAXI)],
    &[(138, TAXI), (151, TAXI), (149, TAXI)],
    &[(152, TAXI), (166, TAXI), (165, TAXI), (150, TAXI)],
    &[(153, TAXI), (151, TAXI), (138, TAXI)],
    &[(139, TAXI), (111, TUBE), (154, TAXI_BUS), (140, TUBE), (167, TAXI), (184, BUS), (185, TUBE), (166, TAXI), (180, BUS), (163, TUBE), (152, TAXI), (124, BUS)],
    &[(140, TAXI_BUS), (155, TAXI), (156, BUS), (153, TAXI_BUS), (139, TAXI)],
    &[(156, TAXI), (168, TAXI), (167, TAXI), (154, TAXI)],
    &[(140, TAXI_BUS), (157, TAXI_BUS), (169, TAXI), (184, BUS), (155, TAXI), (154, BUS)],
    &[(133, BUS), (158, TAXI), (142, BUS), (170, TAXI), (185, BUS), (156, TAXI_BUS), (115, BOAT), (194, BOAT)],
    &[(141, TAXI), (142, TAXI), (159, TAXI), (157, TAXI)],
    &[(158, TAXI), (172, TAXI), (198, TAXI), (186, TAXI), (170, TAXI)],
    &[(143, TAXI), (161, TAXI), (173, TAXI), (128, TAXI)],
    &[(107, BUS), (174, TAXI), (199, BUS), (160, TAXI), (128, BUS), (135, TAXI_BUS)],
    &[(175, TAXI), (136, TAXI)],
    &[(146, TAXI), (111, TUBE), (153, TUBE), (191, BUS), (177, TAXI), (176, BUS), (144, BUS)],
    &[(147, TAXI), (148, TAXI), (179, TAXI), (178, TAXI)],
    &[(149, TAXI), (123, BUS), (151, TAXI), (180, TAXI_BUS), (179, TAXI), (191, BUS)],
    &[(153, TAXI), (183, TAXI), (181, TAXI), (151, TAXI)],
    &[(155, TAXI), (168, TAXI), (183, TAXI), (153, TAXI)],
    &[(155, TAXI), (184, TAXI), (167, TAXI)],
    &[(156, TAXI), (184, TAXI)],
    &[(157, TAXI), (159, TAXI), (185, TAXI)],
    &[(173, TAXI), (175, TAXI), (199, TAXI)],
    &[(128, TAXI), (187, TAXI), (159, TAXI)],
    &[(160, TAXI), (174, TAXI), (171, TAXI), (188, TAXI)],
    &[(175, TAXI), (173, TAXI), (161, TAXI)],
    &[(162, TAXI), (171, TAXI), (174, TAXI)],
    &[(177, TAXI), (163, BUS), (189, TAXI), (190, BUS)],
    &[(144, TAXI), (163, TAXI), (176, TAXI)],
    &[(164, TAXI), (191, TAXI), (189, TAXI)],
    &[(165, TAXI), (191, TAXI), (164, TAXI)],
    &[(165, TAXI_BUS), (181, TAXI), (153, BUS), (193, TAXI), (184, BUS), (190, BUS)],
    &[(166, TAXI), (182, TAXI), (193, TAXI), (180, TAXI)],
    &[(183, TAXI), (195, TAXI), (181, TAXI)],
    &[(167, TAXI), (196, TAXI), (182, TAXI), (166, TAXI)],
    &[(169, TAXI), (156, BUS), (185, TAXI_BUS), (197, TAXI), (196, TAXI), (180, BUS), (168, TAXI), (153, BUS)],
    &[(170, TAXI), (157, BUS), (186, TAXI), (187, BUS), (128, TUBE), (184, TAXI_BUS), (153, TUBE)],
    &[(159, TAXI), (198, TAXI), (185, TAXI)],
    &[(172, TAXI), (128, BUS), (188, TAXI), (198, TAXI), (185, BUS)],
    &[(128, TAXI), (173, TAXI), (199, TAXI), (187, TAXI)],
    &[(178, TAXI), (190, TAXI), (176, TAXI)],
    &[(191, TAXI_BUS), (192, TAXI), (180, BUS), (189, TAXI), (176, BUS)],
    &[(179, TAXI), (165, BUS), (192, TAXI), (190, TAXI_BUS), (178, TAXI), (163, BUS)],
    &[(191, TAXI), (194, TAXI), (190, TAXI)],
    &[(181, TAXI), (194, TAXI), (180, TAXI)],
    &[(195, TAXI), (192, TAXI), (193, TAXI), (157, BOAT)],
    &[(182, TAXI), (197, TAXI), (194, TAXI)],
    &[(183, TAXI), (184, TAXI), (197, TAXI)],
    &[(196, TAXI), (184, TAXI), (195, TAXI)],
    &[(159, TAXI), (187, TAXI), (199, TAXI), (186, TAXI)],
    &[(188, TAXI), (128, BUS), (171, TAXI), (161, BUS), (198, TAXI)],
];
