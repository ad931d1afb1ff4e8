//! Reusable `main.cpp` contents.

/// The include block the tool writes, as one string
pub const FIXED_HEADER: &str = "#include <Arduino.h>
#include <WiFi.h>
#include <ESPmDNS.h>
#include <WiFiUdp.h>
#include <ArduinoOTA.h>
#include <Preferences.h>
#include <Update.h>
";

/// Body that follows the include block in the firmware entry point
pub const FIRMWARE_BODY: &str = "#include <esp_wifi.h>

#include \"bluetti_device.h\"
#include \"mqtt_handler.h\"

void setup() {
  Serial.begin(115200);
}

void loop() {}
";

/// Same includes as `FIXED_HEADER`, in the wrong order
pub const SCRAMBLED_HEADER: &str = "#include <WiFi.h>
#include <Arduino.h>
#include <Update.h>
#include <ESPmDNS.h>
#include <Preferences.h>
#include <WiFiUdp.h>
#include <ArduinoOTA.h>
";

/// A full `main.cpp` with its includes out of order
pub fn scrambled_main_cpp() -> String {
    format!("{}{}", SCRAMBLED_HEADER, FIRMWARE_BODY)
}
