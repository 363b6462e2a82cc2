//! Coarse landmass outlines, (lat, lng) in degrees.
//!
//! A few dozen vertices per landmass: enough to orient yourself on the map,
//! not enough to decide land or water (the geocoder does that).

pub struct Landmass {
    pub name: &'static str,
    pub outline: &'static [(f64, f64)],
}

pub static LANDMASSES: &[Landmass] = &[
    Landmass {
        name: "North America",
        outline: &[
            (71.0, -156.0),
            (70.0, -141.0),
            (69.5, -128.0),
            (68.0, -115.0),
            (68.5, -98.0),
            (66.0, -87.0),
            (62.0, -94.0),
            (57.0, -92.0),
            (55.0, -82.0),
            (60.0, -78.0),
            (62.5, -73.0),
            (58.5, -68.0),
            (60.0, -64.0),
            (55.0, -60.0),
            (52.0, -56.0),
            (47.5, -53.0),
            (47.0, -60.0),
            (44.5, -64.0),
            (42.0, -70.0),
            (40.5, -74.0),
            (35.0, -76.0),
            (32.0, -81.0),
            (27.0, -80.0),
            (25.2, -80.5),
            (29.0, -83.0),
            (30.0, -88.0),
            (29.5, -94.0),
            (26.0, -97.2),
            (21.5, -97.5),
            (18.5, -95.0),
            (18.5, -91.0),
            (21.5, -87.0),
            (16.0, -88.5),
            (15.0, -83.5),
            (11.0, -83.7),
            (9.0, -79.5),
            (7.5, -78.0),
            (8.0, -81.0),
            (13.0, -87.5),
            (16.0, -95.0),
            (20.0, -105.5),
            (23.0, -106.5),
            (31.0, -114.0),
            (23.0, -110.0),
            (28.0, -115.0),
            (34.0, -118.5),
            (37.5, -122.5),
            (42.0, -124.3),
            (48.5, -124.7),
            (54.0, -130.0),
            (59.0, -139.0),
            (60.0, -147.0),
            (57.0, -157.0),
            (55.0, -164.0),
            (60.0, -165.0),
            (64.0, -166.0),
            (66.0, -168.0),
            (71.0, -156.0),
        ],
    },
    Landmass {
        name: "Greenland",
        outline: &[
            (83.0, -40.0),
            (82.0, -22.0),
            (77.0, -18.0),
            (70.0, -22.0),
            (65.5, -37.0),
            (60.0, -43.0),
            (61.0, -48.0),
            (66.0, -53.5),
            (70.0, -54.0),
            (76.0, -66.0),
            (78.5, -73.0),
            (82.0, -60.0),
            (83.0, -40.0),
        ],
    },
    Landmass {
        name: "South America",
        outline: &[
            (12.0, -72.0),
            (10.5, -64.0),
            (8.5, -60.0),
            (5.5, -54.0),
            (4.0, -51.5),
            (0.0, -50.0),
            (-2.5, -44.0),
            (-5.0, -37.0),
            (-8.0, -35.0),
            (-13.0, -38.5),
            (-18.0, -39.5),
            (-23.0, -42.0),
            (-25.5, -48.0),
            (-30.0, -50.5),
            (-34.5, -54.0),
            (-36.0, -57.0),
            (-39.0, -62.0),
            (-42.0, -64.0),
            (-46.0, -67.5),
            (-50.0, -68.5),
            (-54.5, -66.5),
            (-55.5, -70.0),
            (-52.0, -75.0),
            (-46.0, -75.5),
            (-40.0, -73.5),
            (-33.0, -71.7),
            (-27.0, -70.8),
            (-18.5, -70.3),
            (-15.0, -75.5),
            (-6.0, -81.0),
            (-2.5, -80.5),
            (1.0, -80.0),
            (4.0, -77.5),
            (8.0, -77.5),
            (11.0, -75.0),
            (12.0, -72.0),
        ],
    },
    Landmass {
        name: "Eurasia",
        outline: &[
            (36.0, -6.0),
            (37.0, -9.0),
            (43.0, -9.3),
            (43.5, -2.0),
            (46.5, -1.5),
            (48.5, -4.7),
            (50.0, 1.5),
            (53.5, 7.0),
            (57.0, 8.5),
            (55.5, 10.0),
            (54.0, 14.0),
            (57.0, 21.0),
            (60.0, 24.0),
            (65.5, 25.0),
            (63.0, 21.0),
            (60.5, 17.5),
            (56.0, 16.0),
            (58.0, 11.5),
            (59.0, 5.5),
            (62.5, 5.0),
            (68.0, 13.5),
            (71.0, 25.5),
            (69.0, 34.0),
            (66.5, 41.0),
            (68.5, 54.0),
            (70.0, 60.0),
            (73.0, 70.0),
            (72.5, 80.0),
            (76.0, 97.0),
            (77.5, 105.0),
            (73.5, 113.0),
            (72.5, 128.0),
            (71.5, 140.0),
            (72.0, 152.0),
            (69.5, 162.0),
            (69.5, 170.0),
            (66.0, -170.0),
            (64.5, -173.0),
            (62.0, 179.0),
            (60.0, 170.0),
            (59.5, 163.0),
            (51.0, 156.5),
            (57.0, 156.0),
            (62.0, 163.0),
            (59.0, 154.0),
            (59.5, 143.0),
            (54.0, 137.0),
            (53.0, 141.0),
            (47.0, 138.5),
            (43.0, 132.0),
            (39.5, 128.0),
            (35.0, 129.0),
            (34.5, 126.5),
            (38.0, 125.0),
            (40.0, 121.5),
            (39.0, 118.0),
            (37.5, 122.5),
            (35.0, 119.5),
            (31.0, 122.0),
            (25.0, 119.5),
            (22.5, 114.0),
            (21.5, 108.0),
            (18.5, 106.0),
            (12.0, 109.2),
            (8.5, 105.0),
            (10.5, 104.5),
            (13.5, 100.5),
            (7.0, 100.5),
            (1.3, 103.8),
            (4.0, 100.5),
            (8.0, 98.3),
            (16.5, 97.5),
            (16.0, 94.5),
            (22.0, 91.5),
            (22.0, 88.0),
            (20.0, 86.5),
            (15.5, 80.2),
            (10.0, 79.8),
            (8.0, 77.5),
            (12.0, 75.0),
            (18.5, 73.0),
            (22.5, 69.0),
            (25.0, 66.5),
            (25.5, 57.5),
            (27.0, 56.0),
            (30.0, 50.0),
            (30.0, 48.0),
            (27.0, 50.0),
            (24.0, 51.5),
            (26.0, 56.5),
            (22.5, 59.8),
            (17.0, 55.0),
            (12.8, 45.0),
            (15.0, 42.8),
            (21.5, 39.0),
            (28.0, 34.6),
            (30.0, 32.5),
            (31.5, 34.5),
            (36.5, 36.0),
            (36.5, 30.0),
            (38.5, 26.5),
            (41.0, 26.0),
            (40.5, 23.0),
            (37.0, 22.5),
            (40.0, 20.0),
            (45.5, 13.5),
            (44.0, 12.5),
            (40.0, 18.5),
            (38.0, 15.7),
            (41.0, 13.0),
            (44.0, 9.0),
            (43.0, 3.0),
            (40.5, 0.5),
            (37.5, -0.5),
            (36.0, -6.0),
        ],
    },
    Landmass {
        name: "Africa",
        outline: &[
            (35.8, -5.9),
            (37.0, 10.0),
            (33.5, 11.0),
            (30.5, 19.5),
            (32.5, 23.0),
            (31.0, 32.0),
            (22.0, 36.8),
            (15.5, 39.5),
            (11.5, 43.3),
            (11.8, 51.2),
            (4.0, 48.0),
            (-2.0, 41.5),
            (-7.0, 39.5),
            (-15.0, 40.5),
            (-20.0, 35.0),
            (-25.0, 33.0),
            (-29.0, 32.5),
            (-34.0, 26.0),
            (-34.8, 20.0),
            (-34.0, 18.4),
            (-28.5, 16.5),
            (-22.0, 14.0),
            (-17.0, 11.8),
            (-12.0, 13.7),
            (-6.0, 12.2),
            (-1.0, 9.0),
            (4.0, 9.5),
            (4.5, 6.0),
            (6.5, 2.0),
            (5.0, -2.0),
            (4.5, -7.5),
            (7.5, -13.0),
            (11.0, -15.5),
            (14.7, -17.5),
            (21.0, -17.0),
            (27.5, -13.2),
            (31.5, -9.8),
            (35.8, -5.9),
        ],
    },
    Landmass {
        name: "Madagascar",
        outline: &[
            (-12.0, 49.3),
            (-15.5, 50.5),
            (-25.0, 47.0),
            (-25.5, 45.0),
            (-22.0, 43.3),
            (-16.0, 44.5),
            (-12.0, 49.3),
        ],
    },
    Landmass {
        name: "Australia",
        outline: &[
            (-11.0, 142.5),
            (-17.5, 140.5),
            (-12.0, 136.5),
            (-12.5, 131.0),
            (-15.0, 129.0),
            (-14.0, 126.5),
            (-17.0, 122.5),
            (-20.0, 119.0),
            (-22.0, 114.0),
            (-26.5, 113.5),
            (-31.5, 115.5),
            (-34.5, 115.0),
            (-35.0, 118.0),
            (-33.5, 124.0),
            (-31.5, 131.0),
            (-32.5, 134.0),
            (-35.5, 138.0),
            (-38.0, 140.5),
            (-39.0, 146.5),
            (-37.5, 150.0),
            (-33.0, 151.7),
            (-28.0, 153.5),
            (-24.0, 152.0),
            (-19.0, 146.5),
            (-14.5, 144.5),
            (-11.0, 142.5),
        ],
    },
    Landmass {
        name: "Great Britain",
        outline: &[
            (58.6, -3.0),
            (57.5, -1.8),
            (55.5, -1.6),
            (53.0, 0.3),
            (52.5, 1.7),
            (51.0, 1.3),
            (50.7, -1.5),
            (50.0, -5.5),
            (51.6, -5.0),
            (53.0, -4.5),
            (54.5, -3.5),
            (55.0, -5.0),
            (56.5, -6.0),
            (58.5, -5.0),
            (58.6, -3.0),
        ],
    },
    Landmass {
        name: "Japan",
        outline: &[
            (45.5, 142.0),
            (43.0, 145.5),
            (41.5, 141.0),
            (38.0, 141.0),
            (35.0, 140.0),
            (34.5, 136.8),
            (33.5, 135.5),
            (31.0, 131.0),
            (33.5, 129.5),
            (35.5, 133.0),
            (37.0, 137.0),
            (40.0, 140.0),
            (43.0, 140.5),
            (45.5, 142.0),
        ],
    },
    Landmass {
        name: "Borneo",
        outline: &[
            (7.0, 117.0),
            (1.0, 119.0),
            (-4.0, 116.0),
            (-3.0, 111.0),
            (-1.0, 109.0),
            (2.0, 109.6),
            (4.5, 114.0),
            (7.0, 117.0),
        ],
    },
    Landmass {
        name: "Sumatra",
        outline: &[
            (5.6, 95.3),
            (3.0, 99.5),
            (-1.0, 104.5),
            (-5.8, 105.8),
            (-5.0, 103.0),
            (-1.0, 100.0),
            (2.5, 96.5),
            (5.6, 95.3),
        ],
    },
    Landmass {
        name: "New Guinea",
        outline: &[
            (-0.8, 131.0),
            (-2.5, 137.5),
            (-4.0, 145.0),
            (-8.0, 148.5),
            (-10.5, 150.5),
            (-8.5, 143.5),
            (-9.0, 141.0),
            (-6.5, 138.5),
            (-4.0, 133.0),
            (-0.8, 131.0),
        ],
    },
    Landmass {
        name: "New Zealand",
        outline: &[
            (-34.5, 172.7),
            (-37.5, 178.5),
            (-41.5, 175.3),
            (-44.0, 173.0),
            (-46.6, 169.0),
            (-45.5, 166.5),
            (-41.0, 172.0),
            (-38.0, 174.5),
            (-34.5, 172.7),
        ],
    },
    Landmass {
        name: "Antarctica",
        outline: &[
            (-63.0, -57.0),
            (-70.0, -62.0),
            (-73.0, -78.0),
            (-74.0, -100.0),
            (-75.0, -120.0),
            (-77.0, -145.0),
            (-78.0, -165.0),
            (-77.5, 165.0),
            (-71.0, 170.0),
            (-67.0, 145.0),
            (-66.0, 120.0),
            (-66.5, 95.0),
            (-68.0, 75.0),
            (-67.0, 50.0),
            (-69.5, 30.0),
            (-70.0, 5.0),
            (-71.0, -10.0),
            (-75.0, -25.0),
            (-78.0, -40.0),
            (-73.0, -60.0),
            (-63.0, -57.0),
        ],
    },
];
