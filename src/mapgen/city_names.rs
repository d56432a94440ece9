//! Curated city names for generated maps

/// City names, handed out in order
pub const CITY_NAMES: &[&str] = &[
    "Talihina", "Pinson", "Fabens", "Clifton", "Abilene", "Bandera", "Calistoga", "Dahlonega", "Eufaula", "Fairhope",
    "Galena", "Harmony", "Ironton", "Jasper", "Kerrville", "Lamesa", "Marfa", "Natchez", "Ozona", "Paonia",
    "Quitman", "Ruidoso", "Salida", "Taos", "Ukiah", "Vidalia", "Wallace", "Yreka", "Zapata", "Alpine",
    "Boerne", "Cody", "Durango", "Elko", "Fredonia", "Gunnison", "Hondo", "Ignacio", "Juneau", "Kanab",
    "Laramie", "Moab", "Nogales", "Ouray", "Pagosa", "Quincy", "Rifle", "Sedona", "Telluride", "Uvalde",
    "Valdez", "Winslow", "Yuma", "Astoria", "Bisbee", "Chama", "Delta", "Ennis", "Florence", "Gallup",
    "Hatch", "Idaho", "Jerome", "Kingman", "Lander", "Mancos", "Needles", "Ogden", "Payson", "Raton",
    "Socorro", "Tombstone", "Tucumcari", "Vernal", "Wickenburg", "Ajo", "Baker", "Carlsbad", "Deming", "Estes",
    "Farmington", "Globe", "Hobbs", "Holbrook", "Lordsburg", "Magdalena", "Nephi", "Oracle", "Page", "Roswell",
    "Safford", "Silverton", "Springer", "Tonopah", "Tularosa", "Williams", "Winnemucca", "Yoakum", "Zuni", "Eagle",
];
